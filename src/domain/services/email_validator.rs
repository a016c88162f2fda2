/// Opaque email-format check
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}
