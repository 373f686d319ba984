/// Bucket id for costs that have no assignees
pub const UNASSIGNED_ID: &str = "unassigned";

/// Display name of the unassigned bucket
pub const UNASSIGNED_NAME: &str = "Unassigned";

/// Slice id used for the gap between the effective goal and what has been paid
pub const REMAINING_GOAL_ID: &str = "remaining-goal";

/// Display name of the remaining goal slice
pub const REMAINING_GOAL_NAME: &str = "Remaining Goal";

/// Arc label of the remaining goal slice
pub const REMAINING_GOAL_ARC_LABEL: &str = "Remaining";

/// Inner ring color of the remaining goal slice
pub const REMAINING_GOAL_INNER_COLOR: &str = "#D1D5DB";

/// Outer ring color of the remaining goal slice (slightly darker for contrast)
pub const REMAINING_GOAL_OUTER_COLOR: &str = "#9CA3AF";

/// Suffix of outer ring slice ids holding a member's paid share
pub const PAID_SLICE_SUFFIX: &str = "-paid";

/// Suffix of outer ring slice ids holding a member's unpaid share
pub const UNPAID_SLICE_SUFFIX: &str = "-unpaid";

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: &str = "$";

/// Decimal places for chart values and percentages
pub const CHART_DISPLAY_PRECISION: u32 = 0;

/// Decimal places for cost amounts in the cost list
pub const COST_DISPLAY_PRECISION: u32 = 2;

/// Colors of the paid slices, one per member in first-seen order
pub const PAID_COLORS: [&str; 11] = [
    "#4ADE80", // green
    "#60A5FA", // blue
    "#A855F7", // purple
    "#F472B6", // pink
    "#FBBF24", // yellow
    "#EF4444", // red
    "#34D399", // teal
    "#8B5CF6", // violet
    "#EC4899", // fuchsia
    "#F97316", // orange
    "#E879F9", // magenta
];

/// Lighter companions of `PAID_COLORS` for the unpaid slices
pub const UNPAID_COLORS: [&str; 11] = [
    "#A7F3D0", "#BFDBFE", "#D8B4FE", "#FBCFE8", "#FDE68A", "#FECACA", "#99F6E4", "#C4B5FD",
    "#F9A8D4", "#FED7AA", "#F5D0FE",
];

/// Placeholder shown when the plan has no positive goal
pub const NO_GOAL_MESSAGE: &str = "No goal set for this budget plan.";

/// Placeholder shown while no non-zero slices exist yet
pub const LOADING_MESSAGE: &str = "Loading chart data...";

/// Budget plans whose chart data the chart service keeps by default
pub const DEFAULT_CHART_CACHE_CAPACITY: usize = 256;
