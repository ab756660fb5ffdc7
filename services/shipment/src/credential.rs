// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use bookingapi_core::{utils::Redact, SigningCredential};

/// Credential for the booking API.
///
/// The access id travels in cleartext in the `Authorization` header, the
/// signing key never leaves the process.
#[derive(Clone)]
pub struct Credential {
    /// Access id sent in front of the signature.
    pub access_id: String,
    /// Shared secret used as the HMAC key.
    pub signing_key: Vec<u8>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_id: impl Into<String>, signing_key: impl AsRef<[u8]>) -> Self {
        Self {
            access_id: access_id.into(),
            signing_key: signing_key.as_ref().to_vec(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_id", &Redact::from(&self.access_id))
            .field("signing_key", &Redact::from(&self.signing_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_id.is_empty() && !self.signing_key.is_empty()
    }
}
