use growstr::GrowableString;
use proptest::prelude::*;
use wordgrid::{encode, transform};

proptest! {
    #[test]
    fn encoding_keeps_every_word_byte(sentence in "[a-z ]{0,48}") {
        let text = GrowableString::try_from(sentence.as_str()).unwrap();
        let grid = transform(&text).unwrap();
        let encoded = encode(&grid).unwrap();

        let word_bytes: usize = sentence.split_ascii_whitespace().map(str::len).sum();
        prop_assert_eq!(encoded.len(), word_bytes + grid.rows());

        let mut expected: Vec<u8> = sentence.bytes().filter(|b| *b != b' ').collect();
        let mut actual: Vec<u8> = encoded.bytes().filter(|b| *b != b' ').collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }
}
