#![allow(dead_code)]

/// Builder for encoded documents.
#[derive(Debug, Clone, Default)]
pub struct Doc(Vec<u8>);

impl Doc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with a raw payload.
    pub fn raw(mut self, tag: u8, name: &str, payload: &[u8]) -> Self {
        self.0.push(tag);
        self.0.extend_from_slice(name.as_bytes());
        self.0.push(0);
        self.0.extend_from_slice(payload);
        self
    }

    pub fn double(self, name: &str, x: f64) -> Self {
        self.raw(0x01, name, &x.to_le_bytes())
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.raw(0x02, name, &string(s))
    }

    pub fn document(self, name: &str, doc: Doc) -> Self {
        self.raw(0x03, name, &doc.build())
    }

    pub fn array(self, name: &str, doc: Doc) -> Self {
        self.raw(0x04, name, &doc.build())
    }

    pub fn binary(self, name: &str, subtype: u8, data: &[u8]) -> Self {
        let mut payload = (data.len() as i32).to_le_bytes().to_vec();
        payload.push(subtype);
        payload.extend_from_slice(data);
        self.raw(0x05, name, &payload)
    }

    pub fn boolean(self, name: &str, b: u8) -> Self {
        self.raw(0x08, name, &[b])
    }

    pub fn null(self, name: &str) -> Self {
        self.raw(0x0A, name, &[])
    }

    pub fn int32(self, name: &str, x: i32) -> Self {
        self.raw(0x10, name, &x.to_le_bytes())
    }

    pub fn int64(self, name: &str, x: i64) -> Self {
        self.raw(0x12, name, &x.to_le_bytes())
    }

    /// Encode with the size header and terminator.
    pub fn build(self) -> Vec<u8> {
        let size = self.0.len() as i32 + 5;
        let mut out = size.to_le_bytes().to_vec();
        out.extend(self.0);
        out.push(0);
        out
    }
}

/// Encode a length-prefixed, zero-terminated string payload.
pub fn string(s: &str) -> Vec<u8> {
    let mut out = (s.len() as i32 + 1).to_le_bytes().to_vec();
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    out
}

/// Encode a code-with-scope payload, with the declared length adjusted by
/// `slack`.
pub fn code_with_scope(code: &str, scope: Doc, slack: i32) -> Vec<u8> {
    let mut body = string(code);
    body.extend(scope.build());
    let mut out = (body.len() as i32 + 4 + slack).to_le_bytes().to_vec();
    out.extend(body);
    out
}

/// A chain of documents nested `depth` levels below the top.
pub fn nested(depth: usize) -> Vec<u8> {
    let mut doc = Doc::new().null("leaf");
    for _ in 0..depth {
        doc = Doc::new().document("d", doc);
    }
    doc.build()
}
