pub mod common;




#[cfg(test)]
mod test_deferred_steps;

#[cfg(test)]
mod test_session;
