/// SigningCredential is the trait used by the executor to decide whether a
/// credential can sign a request at all.
pub trait SigningCredential: Clone + Send + Sync + 'static {
    /// Check if the credential is complete.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}
