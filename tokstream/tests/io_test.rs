use embedded_io::{Error as _, ErrorKind, Read, Write};
use tokstream::{SeekOrigin, StreamError, TokenStream};

mod readers;
use readers::{FailingReader, OneByteReader};

#[test]
fn test_fill_from_one_byte_reader() {
    let input = b"word by word";
    let mut reader = OneByteReader::new(input.iter().copied());
    let mut stream = TokenStream::new().unwrap();

    assert_eq!(stream.fill_from(&mut reader).unwrap(), input.len());
    assert_eq!(stream.as_bytes(), input);
    assert_eq!(stream.next_word().unwrap().unwrap(), "word");
}

#[test]
fn test_fill_from_spans_chunks() {
    let input: Vec<u8> = (0..300).map(|i| if i % 10 == 9 { b' ' } else { b'x' }).collect();
    let mut source: &[u8] = &input;
    let mut stream = TokenStream::new().unwrap();

    assert_eq!(stream.fill_from(&mut source).unwrap(), 300);

    let mut words = 0;
    while let Some(word) = stream.next_word().unwrap() {
        assert_eq!(word.len(), 9);
        words += 1;
    }
    assert_eq!(words, 30);
}

#[test]
fn test_fill_from_reports_source_error() {
    let mut reader = FailingReader::new(b"partial", ErrorKind::Other);
    let mut stream = TokenStream::new().unwrap();

    let err = stream.fill_from(&mut reader).unwrap_err();
    assert_eq!(err, StreamError::Source(ErrorKind::Other));
    assert_eq!(err.kind(), ErrorKind::Other);
    assert_eq!(stream.as_bytes(), b"partial");
}

#[test]
fn test_read_and_write_traits() {
    let mut stream = TokenStream::new().unwrap();
    stream.write_all(b"hello").unwrap();
    stream.flush().unwrap();

    let mut buf = [0u8; 3];
    assert_eq!(stream.read(&mut buf).unwrap(), 3);
    assert_eq!(&buf, b"hel");
    assert_eq!(stream.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"lo");
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
}

#[test]
fn test_error_kinds() {
    let mut stream = TokenStream::new().unwrap();
    let err = stream.seek_read(1, SeekOrigin::Begin).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let core = StreamError::from(growvec::GrowVecError::AllocationFailure { requested: 8 });
    assert_eq!(core.kind(), ErrorKind::Other);
}
