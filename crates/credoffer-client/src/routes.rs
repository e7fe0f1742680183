//! RPC route names exposed by the credential offer service.

use std::fmt;

/// A named RPC on the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcRoute {
    /// Issue an ad-hoc credential offer and get back a scannable code.
    GenericCredentialOffer,
}

impl RpcRoute {
    /// The route name as it appears in the request path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenericCredentialOffer => "genericCredentialOffer",
        }
    }
}

impl fmt::Display for RpcRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
