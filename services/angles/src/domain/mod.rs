pub mod angle_set;
pub mod kinematics;
