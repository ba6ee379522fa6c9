use std::io::Read;

use rocket_memory_upload::{FieldItem, FieldStoreError, MemoryFieldItem, MemoryFieldItemFactory};

fn item(capacity: usize) -> MemoryFieldItem {
    MemoryFieldItemFactory::with_capacity(capacity).create_item("data", None, true, None)
}

#[test]
fn write_then_read_back() {
    let mut item = item(16);

    item.write_all(b"01234").unwrap();
    item.write_all(b"56789").unwrap();

    assert_eq!(10, item.size());
    assert_eq!(b"0123456789", item.bytes());
    assert!(!item.is_empty());
}

#[test]
fn write_up_to_exact_capacity() {
    let mut item = item(4);

    item.write_all(b"abcd").unwrap();

    assert_eq!(4, item.size());
    assert_eq!(b"abcd", item.bytes());
}

#[test]
fn write_over_capacity_is_rejected() {
    let mut item = item(16);

    item.write_all(b"0123456789").unwrap();

    match item.write_all(b"0123456789") {
        Err(FieldStoreError::CapacityExceededError(field)) => assert_eq!("data-0", field.as_ref()),
        other => panic!("unexpected result: {:?}", other),
    }

    // The overflowing write must not have been applied partially.
    assert_eq!(10, item.size());
    assert_eq!(b"0123456789", item.bytes());
}

#[test]
fn write_byte_advances_the_fill() {
    let mut item = item(2);

    item.write_byte(b'a').unwrap();
    item.write_byte(b'b').unwrap();

    assert_eq!(b"ab", item.bytes());
    assert!(item.write_byte(b'c').is_err());
}

#[test]
fn delete_resets_like_a_fresh_item() {
    let mut item = item(8);

    item.write_all(b"12345678").unwrap();

    item.delete();

    assert_eq!(0, item.size());
    assert!(item.is_empty());
    assert_eq!(b"", item.bytes());

    item.write_all(b"abc").unwrap();

    assert_eq!(3, item.size());
    assert_eq!(b"abc", item.bytes());
}

#[test]
fn reader_yields_only_the_written_prefix() {
    let mut item = item(64);

    item.write_all(b"hello").unwrap();

    let mut buffer = Vec::new();

    item.reader().read_to_end(&mut buffer).unwrap();

    assert_eq!(b"hello".to_vec(), buffer);
}

#[test]
fn into_bytes_truncates_to_the_fill() {
    let mut item = item(64);

    item.write_all(b"hello").unwrap();

    assert_eq!(b"hello".to_vec(), item.into_bytes());
}

#[test]
fn capacity_is_fixed_and_distinct_from_size() {
    let mut item = item(32);

    item.write_all(b"xy").unwrap();

    assert_eq!(2, item.size());
    assert_eq!(32, item.capacity());
}

#[test]
fn text_decodes_utf8() {
    let mut item = item(16);

    item.write_all("héllo".as_bytes()).unwrap();

    assert_eq!("héllo", item.text());
    assert_eq!("héllo", item.text_with_charset("UTF-8").unwrap());
    assert_eq!("héllo", item.text_with_charset("utf-8").unwrap());
}

#[test]
fn text_with_latin_1_charset() {
    let mut item = item(16);

    item.write_all(b"h\xe9llo").unwrap();

    assert_eq!("héllo", item.text_with_charset("ISO-8859-1").unwrap());
}

#[test]
fn unknown_charset_is_rejected() {
    let mut item = item(16);

    item.write_all(b"abc").unwrap();

    match item.text_with_charset("NO-SUCH-ENCODING") {
        Err(FieldStoreError::UnsupportedEncodingError(label)) => {
            assert_eq!("NO-SUCH-ENCODING", label)
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn persistence_is_always_rejected() {
    let mut item = item(16);

    assert!(matches!(
        item.persist_to("/tmp/upload"),
        Err(FieldStoreError::PersistNotSupportedError)
    ));

    item.write_all(b"some data").unwrap();

    assert!(matches!(
        item.persist_to("/tmp/upload"),
        Err(FieldStoreError::PersistNotSupportedError)
    ));

    assert!(item.is_in_memory());
}

#[test]
fn items_are_usable_through_the_trait() {
    fn fill<I: FieldItem>(item: &mut I) -> Result<(), FieldStoreError> {
        item.write_all(b"via")?;
        item.write_byte(b' ')?;
        item.write_all(b"trait")
    }

    let mut item = item(16);

    fill(&mut item).unwrap();

    let item: &dyn FieldItem = &item;

    assert_eq!(b"via trait", item.bytes());
    assert_eq!(9, item.size());
    assert!(item.is_in_memory());
    assert!(item.persist_to("/tmp/upload".as_ref()).is_err());
}
