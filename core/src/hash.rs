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

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use md5::Digest;
use md5::Md5;
use sha1::Sha1;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// Lowercase hex encoded MD5 hash.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Base64 encoded HMAC with SHA1 hash.
///
/// Returns [`crate::ErrorKind::KeyInvalid`] if `key` is empty.
pub fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> crate::Result<String> {
    if key.is_empty() {
        return Err(Error::key_invalid("signing key must not be empty"));
    }

    let mut h = Hmac::<Sha1>::new_from_slice(key)
        .map_err(|_| Error::key_invalid("signing key rejected by hmac"))?;
    h.update(content);

    Ok(base64_encode(&h.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"", "d41d8cd98f00b204e9800998ecf8427e"; "empty body")]
    #[test_case(br#"{"Barcode":"703451258001"}"#, "6f7884067459505bc74a8306f45070a8"; "json body")]
    fn test_hex_md5(input: &[u8], expected: &str) {
        assert_eq!(expected, hex_md5(input));
    }

    #[test]
    fn test_base64_hmac_sha1_rfc2202() {
        // RFC 2202 test case 2.
        let sig = base64_hmac_sha1(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!("7/zfauXrL6LSdBbV8YTfnCWafHk=", sig);
    }

    #[test]
    fn test_base64_hmac_sha1_distinct_messages() {
        let a = base64_hmac_sha1(b"Jefe", b"what do ya want for nothing?").unwrap();
        let b = base64_hmac_sha1(b"Jefe", b"what do ya want for something?").unwrap();
        assert_eq!("WfrlQkNl0zc+SZiLIhMj9rWeaes=", b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_base64_hmac_sha1_empty_key() {
        let err = base64_hmac_sha1(b"", b"anything").unwrap_err();
        assert_eq!(ErrorKind::KeyInvalid, err.kind());
    }

    #[test]
    fn test_base64_round_trip_label_bytes() {
        assert_eq!("Fw==", base64_encode(&[23]));
        assert_eq!(vec![23], base64_decode("Fw==").unwrap());
        assert!(base64_decode("not base64!").is_err());
    }
}
