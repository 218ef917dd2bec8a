pub(super) const EMPTY: &str = "\n\n\n\n\n\n\n";
pub(super) const BASE: &str = "\n\n\n\n\n\n‾‾‾";
pub(super) const POST: &str = "\n |\n |\n |\n |\n |\n‾‾‾";
pub(super) const BEAM: &str = "\n |‾‾‾‾‾‾‾‾\n |\n |\n |\n |\n‾‾‾";
pub(super) const ROPE: &str = "\n |‾‾‾‾‾‾‾‾|\n |\n |\n |\n |\n‾‾‾";
pub(super) const HEAD: &str = "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |\n |\n |\n‾‾‾";
pub(super) const BODY: &str = "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |        |\n |\n |\n‾‾‾";
pub(super) const LEFT_ARM: &str = "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |       /|\n |\n |\n‾‾‾";
pub(super) const BOTH_ARMS: &str = "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |       /|\\\n |\n |\n‾‾‾";
pub(super) const LEFT_LEG: &str =
    "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |       /|\\\n |       /\n |\n‾‾‾";
pub(super) const BOTH_LEGS: &str =
    "\n |‾‾‾‾‾‾‾‾|\n |        ◯\n |       /|\\\n |       / \\\n |\n‾‾‾";

pub(super) const EASY: &[&str] = &[
    EMPTY, BASE, POST, BEAM, ROPE, HEAD, BODY, LEFT_ARM, BOTH_ARMS, LEFT_LEG, BOTH_LEGS,
];

// Medium and hard skip some frames of the easy sequence.
pub(super) const MEDIUM: &[&str] = &[
    EMPTY, BASE, POST, BEAM, ROPE, HEAD, BODY, BOTH_ARMS, BOTH_LEGS,
];

pub(super) const HARD: &[&str] = &[EMPTY, BEAM, ROPE, HEAD, BODY, BOTH_ARMS, BOTH_LEGS];
