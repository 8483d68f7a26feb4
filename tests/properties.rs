mod fixture;

use fixture::Doc;
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = cassette::parse(&data);
    }

    #[test]
    fn framed_bytes_never_panic(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut data = ((body.len() + 5) as i32).to_le_bytes().to_vec();
        data.extend(&body);
        data.push(0);

        if let Ok(document) = cassette::parse(&data) {
            prop_assert_eq!(document.declared_size() as usize, data.len());
        }
    }

    #[test]
    fn parse_is_deterministic(
        values in proptest::collection::vec(any::<i64>(), 0..16),
        name in "[b-z][a-z]{0,7}",
        text in "[ -~]{0,32}",
    ) {
        let mut array = Doc::new();
        for (i, v) in values.iter().enumerate() {
            array = array.int64(&i.to_string(), *v);
        }
        let data = Doc::new().string(&name, &text).array("a", array).build();

        let first = cassette::parse(&data).unwrap();
        let second = cassette::parse(&data).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.declared_size() as usize, data.len());

        let parsed = first.get("a").and_then(|v| v.as_array()).unwrap();
        let parsed: Vec<_> = parsed.values().filter_map(|v| v.as_i64()).collect();
        prop_assert_eq!(parsed, values);
    }
}
