/// The host declined to apply an edit.
///
/// Hosts may refuse an insertion for reasons outside the caller's control,
/// such as a stale document version. The document and selection are unchanged
/// when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("host rejected the edit")]
pub struct EditRejected;
