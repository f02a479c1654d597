//! Alphabetical rank of Arabic letters.
//!
//! Ranks run from 1 to [`ALPHABET_SIZE`]. Hamza-seated alifs fold onto alif,
//! ta marbuta onto ta, and alif maqsura onto ya.

/// Number of distinct ranks.
pub const ALPHABET_SIZE: u8 = 29;

/// Rank of `letter` in `[1, 29]`, or `None` for anything outside the alphabet.
#[must_use]
pub const fn rank(letter: char) -> Option<u8> {
    let rank = match letter {
        'ا' | 'أ' | 'إ' | 'آ' => 1,
        'ب' => 2,
        'ت' | 'ة' => 3,
        'ث' => 4,
        'ج' => 5,
        'ح' => 6,
        'خ' => 7,
        'د' => 8,
        'ذ' => 9,
        'ر' => 10,
        'ز' => 11,
        'س' => 12,
        'ش' => 13,
        'ص' => 14,
        'ض' => 15,
        'ط' => 16,
        'ظ' => 17,
        'ع' => 18,
        'غ' => 19,
        'ف' => 20,
        'ق' => 21,
        'ك' => 22,
        'ل' => 23,
        'م' => 24,
        'ن' => 25,
        'ه' => 26,
        'و' => 27,
        'ي' | 'ى' => 28,
        'ء' => 29,
        _ => return None,
    };
    Some(rank)
}
