/// Points awarded for completing a round in `jump_count` link clicks.
///
/// Fewer jumps score higher: 1 jump earns 9 points, and every extra jump
/// costs one point down to a floor of 1. Callers must reject a jump count
/// of zero before scoring; the rule itself is total over all inputs.
pub fn compute_points(jump_count: u32) -> u32 {
    10u32.saturating_sub(jump_count).max(1)
}
