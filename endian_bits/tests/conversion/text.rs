use endian_bits::{ByteOrder, EndianConverter, ErrorKind, big_endian, little_endian, select};
use rstest::rstest;

#[rstest]
fn survives(
    #[values(ByteOrder::LittleEndian, ByteOrder::BigEndian)] byte_order: ByteOrder,
    #[values("", "A", "hello, world", "ünïcödé", "日本語", "emoji 😀 and 🦀", "\u{0}\u{FFFF}")] text: &str,
) {
    let converter = select(byte_order);
    let bytes = converter.encode_str(text);
    assert_eq!(bytes.len(), EndianConverter::encode_utf16_len(text));
    assert_eq!(converter.decode_string(&bytes, 0, bytes.len()).as_deref(), Ok(text));
}

#[test]
fn little_endian_is_utf16le() {
    assert_eq!(little_endian().encode_str("Añ"), [0x41, 0x00, 0xF1, 0x00]);
}

#[test]
fn big_endian_is_utf16be() {
    assert_eq!(big_endian().encode_str("Añ"), [0x00, 0x41, 0x00, 0xF1]);
}

#[test]
fn code_units_keep_their_order() {
    let little = little_endian().encode_str("AB");
    let mut big = big_endian().encode_str("AB");
    big.reverse();
    assert_ne!(little, big);
    assert_eq!(little, [0x41, 0x00, 0x42, 0x00]);
}

#[test]
fn decode_inside_buffer() {
    let bytes = [0xFF, 0xFF, 0x00, 0x48, 0x00, 0x69, 0xFF];
    assert_eq!(big_endian().decode_string(&bytes, 2, 4).as_deref(), Ok("Hi"));
}

#[rstest]
fn odd_count(
    #[values(ByteOrder::LittleEndian, ByteOrder::BigEndian)] byte_order: ByteOrder,
    #[values(1, 3, 5)] count: usize,
) {
    let bytes = [0x41; 8];
    let result = select(byte_order).decode_string(&bytes, 0, count);
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::OddByteCount));
}

#[rstest]
fn empty(
    #[values(ByteOrder::LittleEndian, ByteOrder::BigEndian)] byte_order: ByteOrder,
    #[values(0, 1, 4)] start: usize,
) {
    let bytes = [0x41, 0x00, 0x42, 0x00];
    assert_eq!(select(byte_order).decode_string(&bytes, start, 0).as_deref(), Ok(""));
}

#[test]
fn range_outside_buffer() {
    let bytes = [0x41, 0x00, 0x42, 0x00];
    let past_end = little_endian().decode_string(&bytes, 2, 4);
    assert_eq!(past_end.map_err(|e| e.kind()), Err(ErrorKind::InsufficientBytes));
    let bad_start = little_endian().decode_string(&bytes, 5, 2);
    assert_eq!(bad_start.map_err(|e| e.kind()), Err(ErrorKind::InvalidStartIndex));
}

#[test]
fn lone_surrogate_is_replaced() {
    let bytes = [0xD8, 0x3D, 0x00, 0x21];
    assert_eq!(big_endian().decode_string(&bytes, 0, 4).as_deref(), Ok("\u{FFFD}!"));
}

#[test]
fn chars_without_allocation() {
    let bytes = little_endian().encode_str("a😀b");
    let chars = little_endian().decode_utf16(&bytes, 0, bytes.len()).unwrap();
    assert!(chars.eq(['a', '😀', 'b']));
}
