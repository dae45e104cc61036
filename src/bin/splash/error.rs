pub(crate) use splash::Result;
