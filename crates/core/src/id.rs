// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a process-unique identifier.
///
/// The form is `<unix-millis>-<suffix>` where the suffix is nine random
/// base-36 characters, giving about 46 bits of entropy per millisecond.
#[must_use]
pub fn generate_id(now: OffsetDateTime) -> String {
    let millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    let mut entropy: u64 = rand::random::<u64>();
    let mut suffix: String = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let index: usize = usize::try_from(entropy % 36).unwrap_or(0);
        suffix.push(char::from(ALPHABET[index]));
        entropy /= 36;
    }
    format!("{millis}-{suffix}")
}
