use super::*;

#[test]
fn test_resolve_known_extension() {
    let resolver = MimeResolver::new();

    assert_eq!(resolver.resolve("/a.html"), "text/html");
    assert_eq!(resolver.resolve("/assets/style.css"), "text/css");
    assert_eq!(resolver.resolve("/img/logo.png"), "image/png");
}

#[test]
fn test_resolve_unknown_extension_falls_back() {
    let resolver = MimeResolver::new();

    assert_eq!(resolver.resolve("/a.unknownext123"), FALLBACK_MIME);
}

#[test]
fn test_resolve_no_extension_falls_back() {
    let resolver = MimeResolver::new();

    assert_eq!(resolver.resolve("/noext"), FALLBACK_MIME);
    assert_eq!(resolver.resolve(""), FALLBACK_MIME);
}

#[test]
fn test_resolve_is_case_insensitive_on_extension() {
    let resolver = MimeResolver::new();

    assert_eq!(resolver.resolve("/INDEX.HTML"), "text/html");
    assert_eq!(resolver.resolve("/photo.JPG"), "image/jpeg");
}

#[test]
fn test_register_overrides_default() {
    let mut resolver = MimeResolver::new();
    resolver.register("map", "application/json");

    assert_eq!(resolver.resolve("/app.js.map"), "application/json");
}

#[test]
fn test_known_count_reflects_registrations() {
    let mut resolver = MimeResolver::new();
    let before = resolver.known_count();
    resolver.register("xyz", "application/x-xyz");

    assert_eq!(resolver.known_count(), before + 1);
}
