//! Test fixtures and constants.

use super::Test;

/// Age public keys for testing key listings.
pub const ALICE_KEY: &str = "age1ql3z7hjy54pw3hyww5ayyfg7zqgvc7w3j2elw8zmrj2kg5sfn9aqmcac8p";
pub const DB1_KEY: &str = "age1zvkyg2lqzraa2lnjvqej32nkuu0ues2s82hzrye869xeexvn73equnujwj";
pub const DB1_KEY_2: &str = "age1nm4tsfv4t6chz0k3mzl6h8jf2r5v0j7q9zwq3lsyd7rz8u9nmx3qv0rxke";

impl Test {
    /// The canonical layout:
    ///
    /// - users alice (one key) and bob (no key), machine db1 (two keys)
    /// - group `ops` = {alice, db1}
    /// - secret `backup-key` granted to `ops` and directly to bob
    pub fn ops() -> Self {
        let t = Self::new();
        t.user("alice", &[ALICE_KEY])
            .user("bob", &[])
            .machine("db1", &[DB1_KEY, DB1_KEY_2])
            .member("ops", "users", "alice")
            .member("ops", "machines", "db1")
            .grant("backup-key", "groups", "ops")
            .grant("backup-key", "users", "bob");
        t
    }
}
