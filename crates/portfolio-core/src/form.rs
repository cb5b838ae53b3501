//! Contact form stub: there is no submission backend, only a gate on the
//! fake "sent" state.

/// The send button may flip to its sent state only when all three fields
/// are non-empty.
pub fn can_submit(name: &str, email: &str, message: &str) -> bool {
    !name.is_empty() && !email.is_empty() && !message.is_empty()
}
