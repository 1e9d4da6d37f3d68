pub mod stage1_validate;
pub mod stage2_score;
pub mod stage3_classify;
