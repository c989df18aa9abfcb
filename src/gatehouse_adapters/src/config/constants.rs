pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "AUTH__JWT__SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "AUTH__POSTGRES__URL";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "AUTH__EMAIL_CLIENT__AUTH_TOKEN";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "AUTH__APP__ALLOWED_ORIGINS";
    pub const RESET_LINK_BASE_URL_ENV_VAR: &str = "AUTH__RESET__LINK_BASE_URL";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "no-reply@gatehouse.dev";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
