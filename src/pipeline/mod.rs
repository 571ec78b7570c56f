pub mod stage1_validate;
pub mod stage2_ranks;
pub mod stage3_distance;
pub mod stage4_report;
