pub(crate) mod gauge;
