pub mod logging;

#[cfg(test)]
pub(crate) mod test_server;
