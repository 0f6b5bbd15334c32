//! User-identity directory lookups
//!
//! `UserOption` validates and resolves user specifications through the
//! [`UserDirectory`] trait. Two implementations are provided:
//! - [`SystemUsers`] - the host passwd database (Unix)
//! - [`StaticUsers`] - an in-memory table, for tests and hermetic embedding

use std::path::PathBuf;

use crate::error::{Error, Result};

/// A resolved entry from a user-identity directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Numeric user id
    pub uid: u32,
    /// Primary group id
    pub gid: u32,
    /// Login name
    pub name: String,
    /// Human-readable name (GECOS field on Unix; may be empty)
    pub display_name: String,
    /// Home directory
    pub home_dir: PathBuf,
}

/// Directory service that maps numeric ids and symbolic names to identities
pub trait UserDirectory: Send + Sync {
    /// Look up a user by numeric id
    fn lookup_uid(&self, uid: u32) -> Result<UserIdentity>;

    /// Look up a user by login name
    fn lookup_name(&self, name: &str) -> Result<UserIdentity>;
}

// =============================================================================
// System Directory (Unix passwd database)
// =============================================================================

/// The host system's user database, queried via `getpwuid_r`/`getpwnam_r`
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUsers;

#[cfg(unix)]
impl SystemUsers {
    /// Build an identity from a populated passwd record.
    ///
    /// The string fields point into the caller's lookup buffer, which must
    /// still be alive.
    unsafe fn identity_from_passwd(pw: &libc::passwd) -> UserIdentity {
        let cstr = |ptr: *const libc::c_char| -> String {
            if ptr.is_null() {
                String::new()
            } else {
                // Null-checked above; validity is the caller's contract.
                unsafe { std::ffi::CStr::from_ptr(ptr) }
                    .to_string_lossy()
                    .into_owned()
            }
        };
        // GECOS is comma-separated; the first field is the full name.
        let gecos = cstr(pw.pw_gecos);
        let display_name = gecos.split(',').next().unwrap_or("").to_string();
        UserIdentity {
            uid: pw.pw_uid,
            gid: pw.pw_gid,
            name: cstr(pw.pw_name),
            display_name,
            home_dir: PathBuf::from(cstr(pw.pw_dir)),
        }
    }

    /// Run one of the re-entrant passwd lookups, growing the string buffer
    /// on ERANGE. `query` names the lookup subject for error reporting.
    fn lookup_with<F>(query: &str, mut call: F) -> Result<UserIdentity>
    where
        F: FnMut(
            *mut libc::passwd,
            *mut libc::c_char,
            libc::size_t,
            *mut *mut libc::passwd,
        ) -> libc::c_int,
    {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let mut buf = vec![0 as libc::c_char; 1024];

        loop {
            let rc = call(&mut pwd, buf.as_mut_ptr(), buf.len(), &mut result);
            if rc == 0 {
                break;
            }
            if rc == libc::ERANGE {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            return Err(Error::Io(std::io::Error::from_raw_os_error(rc)));
        }

        if result.is_null() {
            return Err(Error::UserNotFound(query.to_string()));
        }
        // pwd's string fields point into buf, which outlives this call.
        Ok(unsafe { Self::identity_from_passwd(&pwd) })
    }
}

#[cfg(unix)]
impl UserDirectory for SystemUsers {
    fn lookup_uid(&self, uid: u32) -> Result<UserIdentity> {
        Self::lookup_with(&uid.to_string(), |pwd, buf, len, result| unsafe {
            libc::getpwuid_r(uid, pwd, buf, len, result)
        })
    }

    fn lookup_name(&self, name: &str) -> Result<UserIdentity> {
        let cname = std::ffi::CString::new(name)
            .map_err(|_| Error::UserNotFound(name.to_string()))?;
        Self::lookup_with(name, |pwd, buf, len, result| unsafe {
            libc::getpwnam_r(cname.as_ptr(), pwd, buf, len, result)
        })
    }
}

// =============================================================================
// Static Directory (in-memory)
// =============================================================================

/// A fixed in-memory user table.
///
/// Useful for tests and for embedding where the host user database should
/// not be consulted.
#[derive(Debug, Clone, Default)]
pub struct StaticUsers {
    users: Vec<UserIdentity>,
}

impl StaticUsers {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the table
    pub fn insert(&mut self, user: UserIdentity) {
        self.users.push(user);
    }

    /// Builder-style insertion
    #[must_use]
    pub fn with_user(mut self, user: UserIdentity) -> Self {
        self.insert(user);
        self
    }
}

impl UserDirectory for StaticUsers {
    fn lookup_uid(&self, uid: u32) -> Result<UserIdentity> {
        self.users
            .iter()
            .find(|u| u.uid == uid)
            .cloned()
            .ok_or_else(|| Error::UserNotFound(uid.to_string()))
    }

    fn lookup_name(&self, name: &str) -> Result<UserIdentity> {
        self.users
            .iter()
            .find(|u| u.name == name)
            .cloned()
            .ok_or_else(|| Error::UserNotFound(name.to_string()))
    }
}
