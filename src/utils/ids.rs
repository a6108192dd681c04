/// Random 12-byte identifier rendered as 24 lowercase hex characters
pub fn new_object_id() -> String {
    let bytes: [u8; 12] = rand::random();
    hex::encode(bytes)
}
