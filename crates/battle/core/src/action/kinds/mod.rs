//! Per-variant action behavior.
pub(super) mod apply_effect;
pub(super) mod buff;
pub(super) mod damage;
pub(super) mod heal;
pub(super) mod summon;
pub(super) mod wait;
