#[cfg(test)]
mod common;

#[cfg(test)]
mod role_switch_tests;

#[cfg(test)]
mod submit_tests;


#[cfg(test)]
mod race_tests;
