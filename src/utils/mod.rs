/// Generate a random alphanumeric record id
///
/// Campaign, participant-list, and email-record ids are generated server
/// side with the same 20-character alphanumeric shape as the document
/// store's auto-ids; they are never accepted from clients.
pub fn generate_record_id(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// Default length for generated record ids
pub const RECORD_ID_LENGTH: usize = 20;
