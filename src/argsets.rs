pub struct GetArgs {
    pub key: String,
}
