/// Signing secret used for the impersonation cookie in tests.
///
/// Must be at least 64 bytes, the minimum accepted by the cookie `Key`.
pub static TEST_COOKIE_SECRET: &[u8] =
    b"palaestra-test-cookie-secret-0123456789-abcdefghijklmnopqrstuvwxyz-0123456789";

pub static TEST_ADMIN_EMAIL: &str = "admin@palaestra.test";
pub static TEST_ACADEMIC_EMAIL: &str = "coach@palaestra.test";
