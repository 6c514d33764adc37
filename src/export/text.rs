/// UTF-8 bytes of the summary, unmodified, ready to be written as a
/// `.txt` download.
pub fn to_text_buffer(summary: &str) -> Vec<u8> {
    summary.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_byte_for_byte() {
        let summary = "Tóm tắt: giá vàng tăng mạnh.\nDòng thứ hai.";
        let buffer = to_text_buffer(summary);
        assert_eq!(buffer, summary.as_bytes());
        assert_eq!(String::from_utf8(buffer).unwrap(), summary);
    }

    #[test]
    fn empty_summary_is_an_empty_buffer() {
        assert!(to_text_buffer("").is_empty());
    }
}
