mod angles_test;
mod helpers;
