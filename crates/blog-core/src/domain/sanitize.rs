//! HTML sanitization for user-supplied post bodies.

/// Strip disallowed markup from a post body.
///
/// Uses ammonia's default allow-list: `<script>` and `<style>` are removed
/// together with their content, event-handler attributes and `javascript:`
/// URLs are dropped, ordinary formatting tags survive.
pub fn sanitize_body(body: &str) -> String {
    ammonia::clean(body)
}
