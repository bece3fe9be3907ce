use mkenv::{error::ConfigInitError, prelude::*};
use once_cell::sync::OnceCell;
use website_lib::{DbEnv, LibEnv};

#[cfg(debug_assertions)]
mkenv::make_config! {
    pub struct Hostname {}
}

#[cfg(not(debug_assertions))]
mkenv::make_config! {
    pub struct Hostname {
        pub host: {
            var_name: "WEBSITE_HOST",
            description: "The hostname of the website, allowed by the CORS policy (e.g. https://www.example.com)",
        }
    }
}

mkenv::make_config! {
    pub struct ContactEnv {
        pub email: {
            var_name: "WEBSITE_CONTACT_EMAIL",
            layers: [or_default()],
            description: "The email address shown on the contact page",
            default_val_fmt: "empty",
        },

        pub phone: {
            var_name: "WEBSITE_CONTACT_PHONE",
            layers: [or_default()],
            description: "The phone number shown on the contact page",
            default_val_fmt: "empty",
        },

        pub address: {
            var_name: "WEBSITE_CONTACT_ADDRESS",
            layers: [or_default()],
            description: "The postal address shown on the contact page",
            default_val_fmt: "empty",
        },
    }
}

mkenv::make_config! {
    pub struct ServerEnv {
        pub port: {
            var_name: "WEBSITE_PORT",
            layers: [
                parsed_from_str<u16>(),
                or_default_val(|| 3000),
            ],
            description: "The port used to expose the website",
            default_val_fmt: "3000",
        },

        pub host: { Hostname },

        pub contact: { ContactEnv },
    }
}

mkenv::make_config! {
    pub struct ApiEnv {
        pub db_env: { DbEnv },

        pub server: { ServerEnv },
    }
}

static ENV: OnceCell<ServerEnv> = OnceCell::new();

pub fn env() -> &'static ServerEnv {
    ENV.get().unwrap()
}

fn map_err(err: ConfigInitError<'_>) -> anyhow::Error {
    anyhow::anyhow!("{err}")
}

/// Initializes the environment of the server and of the library, without the database
/// environment.
///
/// This is used by the tests, which provide their own database.
pub fn init_env() -> anyhow::Result<()> {
    let env = ServerEnv::define();
    let lib_env = LibEnv::define();
    env.try_init().map_err(map_err)?;
    lib_env.try_init().map_err(map_err)?;
    website_lib::init_env(lib_env);
    let _ = ENV.set(env);

    Ok(())
}

/// Initializes the whole environment of the server, and returns the database environment.
pub fn init_full_env() -> anyhow::Result<DbEnv> {
    let env = ApiEnv::define();
    let lib_env = LibEnv::define();
    env.try_init().map_err(map_err)?;
    lib_env.try_init().map_err(map_err)?;
    website_lib::init_env(lib_env);
    let _ = ENV.set(env.server);

    Ok(env.db_env)
}
