use serde::Serialize;

/// Renders `message` as pretty JSON and hands it to `emit`, only when DEBUG is on.
pub(crate) fn debug_pretty_json<T, F>(message: &T, emit: F)
where
    T: Serialize + ?Sized,
    F: FnOnce(&str),
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    match serde_json::to_string_pretty(message) {
        Ok(pretty) => emit(&pretty),
        Err(error) => emit(&format!("<unserializable message: {error}>")),
    }
}
