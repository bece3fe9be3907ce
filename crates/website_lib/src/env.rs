use once_cell::sync::OnceCell;

#[cfg(debug_assertions)]
mkenv::make_config! {
    /// The environment used to set up a connection to the SQL database.
    pub struct DbUrlEnv {
        /// The database URL.
        pub db_url: {
            var_name: "DATABASE_URL",
            description: "The URL to the SQL database",
        }
    }
}
#[cfg(not(debug_assertions))]
mkenv::make_config! {
    /// The environment used to set up a connection to the SQL database.
    pub struct DbUrlEnv {
        /// The path to the file containing the database URL.
        pub db_url: {
            var_name: "DATABASE_URL",
            layers: [
                file_read(),
            ],
            description: "The path to the file containing the URL to the SQL database",
        }
    }
}

mkenv::make_config! {
    /// The environment used to set up the storage of the uploaded files.
    pub struct StorageEnv {
        /// The root directory of the uploaded files.
        pub media_root: {
            var_name: "WEBSITE_MEDIA_ROOT",
            layers: [
                or_default_val(|| "media".to_owned()),
            ],
            description: "The directory in which the uploaded files are saved",
            default_val_fmt: "media",
        }
    }
}

mkenv::make_config! {
    /// The environment used to set up the database of the website.
    pub struct DbEnv {
        /// The environment for the SQL database.
        pub db_url: { DbUrlEnv },
        /// The environment for the storage of the uploaded files.
        pub storage: { StorageEnv },
    }
}

mkenv::make_config! {
    /// The environment used by this crate.
    pub struct LibEnv {
        /// The amount of travel pages and testimonials shown on the home page.
        pub home_listing_limit: {
            var_name: "WEBSITE_HOME_LISTING_LIMIT",
            layers: [
                parsed_from_str<u64>(),
                or_default_val(|| 3),
            ],
            description: "The amount of travel pages and testimonials listed on the home page",
            default_val_fmt: "3",
        }
    }
}

static ENV: OnceCell<LibEnv> = OnceCell::new();

/// Initializes the provided library environment as global.
///
/// If this function has already been called, the provided environment will be ignored.
pub fn init_env(env: LibEnv) {
    let _ = ENV.set(env);
}

/// Returns a static reference to the global library environment.
///
/// **Caution**: To use this function, the [`init_env()`] function must have been called at the start
/// of the program.
pub fn env() -> &'static LibEnv {
    ENV.get().unwrap()
}
