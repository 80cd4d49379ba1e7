//! QWERTY keyboard adjacency used to pick typo substitutions.
//!
//! Each lowercase ASCII letter maps to the letters physically next to it on
//! a standard QWERTY layout. The table is immutable process-wide data.

/// Neighbours for `a..=z`, indexed by `letter - b'a'`.
const NEIGHBORS: [&[char]; 26] = [
    /* a */ &['q', 's', 'z'],
    /* b */ &['g', 'h', 'v', 'n'],
    /* c */ &['d', 'f', 'x', 'v'],
    /* d */ &['e', 's', 'f', 'x', 'c'],
    /* e */ &['w', 'r', 'd'],
    /* f */ &['r', 'd', 'g', 'c', 'v'],
    /* g */ &['t', 'f', 'h', 'v', 'b'],
    /* h */ &['y', 'g', 'j', 'b', 'n'],
    /* i */ &['u', 'o', 'k'],
    /* j */ &['u', 'h', 'k', 'n', 'm'],
    /* k */ &['i', 'j', 'l', 'm'],
    /* l */ &['o', 'k', 'p'],
    /* m */ &['j', 'k', 'n'],
    /* n */ &['h', 'j', 'b', 'm'],
    /* o */ &['i', 'p', 'l'],
    /* p */ &['o', 'l'],
    /* q */ &['w', 'a'],
    /* r */ &['e', 't', 'f'],
    /* s */ &['w', 'a', 'd', 'z', 'x'],
    /* t */ &['r', 'y', 'g'],
    /* u */ &['y', 'i', 'j'],
    /* v */ &['f', 'g', 'c', 'b'],
    /* w */ &['q', 'e', 's'],
    /* x */ &['s', 'd', 'z', 'c'],
    /* y */ &['t', 'u', 'h'],
    /* z */ &['a', 's', 'x'],
];

/// Keyboard adjacency lookups.
pub struct KeyboardLayout;

impl KeyboardLayout {
    /// Get the QWERTY neighbours of `ch`, looked up by its lowercase form.
    ///
    /// A character has neighbours only when it lower-cases to exactly one
    /// ASCII letter. That covers `A..=Z`, `a..=z` and a few compatibility
    /// forms such as U+212A KELVIN SIGN; everything else is never substituted.
    pub fn neighbors(ch: char) -> Option<&'static [char]> {
        let mut lower = ch.to_lowercase();
        let key = lower.next()?;
        if lower.next().is_some() || !key.is_ascii_lowercase() {
            return None;
        }
        Some(NEIGHBORS[(key as u8 - b'a') as usize])
    }

    /// Whether `ch` has an adjacency entry.
    pub fn is_eligible(ch: char) -> bool {
        Self::neighbors(ch).is_some()
    }

    /// The neighbour `key` as it replaces `original`: upper-cased when
    /// `original` is upper case.
    pub fn substitute(original: char, key: char) -> char {
        if original.is_uppercase() {
            key.to_ascii_uppercase()
        } else {
            key
        }
    }

    /// Whether `replacement` is a valid typo for `original`, case included.
    pub fn is_neighbor(original: char, replacement: char) -> bool {
        let Some(neighbors) = Self::neighbors(original) else {
            return false;
        };
        neighbors
            .iter()
            .any(|&key| Self::substitute(original, key) == replacement)
    }
}
