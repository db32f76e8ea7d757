/// Encryption seam. Implementations here are total: every input produces
/// output, so the methods return `String` rather than a `Result`.
pub trait Encryptor {
    fn encrypt(&self, message: &str) -> String;
}

pub trait Decryptor {
    fn decrypt(&self, message: &str) -> String;
}
