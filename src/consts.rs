pub const APP_NAME: &str = "EventCraft Pro";

pub mod storage_const {
    pub const INVITATION_KEY_PREFIX: &str = "invitation_";
    pub const LOCAL_STORAGE_TABLE: &str = "local_storage";
    pub const SURREAL_NAMESPACE: &str = "eventcraft";
    pub const SURREAL_DATABASE: &str = "eventcraft";
}

pub mod server_const {
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3587;
    pub const CONFIG_FILE: &str = "eventcraft.yaml";
    pub const ENV_PREFIX: &str = "EVENTCRAFT_";
}

pub const INVITATION_ID_LEN: usize = 13;
