/// Minimum cumulative XP for each level; index `i` holds the cutoff for level `i + 1`.
///
/// Changing any value changes the level of existing users.
pub const LEVEL_THRESHOLDS: [u64; 20] = [
    0,    // Level 1
    50,   // Level 2
    120,  // Level 3
    200,  // Level 4
    300,  // Level 5
    420,  // Level 6
    560,  // Level 7
    720,  // Level 8
    900,  // Level 9
    1100, // Level 10
    1320, // Level 11
    1560, // Level 12
    1820, // Level 13
    2100, // Level 14
    2400, // Level 15
    2720, // Level 16
    3060, // Level 17
    3420, // Level 18
    3800, // Level 19
    4200, // Level 20
];

pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Level held at `xp` cumulative experience
///
/// Returns the highest level whose cutoff is not above `xp`, capped at [`MAX_LEVEL`].
pub fn level_for(xp: u64) -> u32 {
    for (index, &threshold) in LEVEL_THRESHOLDS.iter().enumerate().rev() {
        if xp >= threshold {
            return index as u32 + 1;
        }
    }
    1
}
