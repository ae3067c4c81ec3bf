//! Storage layout for the pageview datalake.
//!
//! Both the local mirror and the S3 bucket use date-derived names, all
//! computed from one `NaiveDate` so the encoded date can never diverge
//! between file and key.
//!
//! ## Layout
//!
//! ```text
//! {data_dir}/                              s3://{bucket}/
//! ├── raw-views/                           └── datalake/
//! │   └── raw-views-YYYY-MM-DD.txt             ├── raw/
//! └── views/                                   │   └── raw-views-YYYY-MM-DD.txt
//!     └── views-YYYY-MM-DD.json                └── views/
//!                                                  └── views-YYYY-MM-DD.json
//! ```

pub mod local;
pub mod s3;

// Re-export for convenience
pub use local::LocalStore;
pub use s3::S3Store;

/// Date-derived file names, relative paths, and object keys.
pub mod paths {
    use chrono::NaiveDate;

    const RAW_DIR: &str = "raw-views";
    const VIEWS_DIR: &str = "views";
    const RAW_KEY_PREFIX: &str = "datalake/raw";
    const VIEWS_KEY_PREFIX: &str = "datalake/views";

    /// File name of the verbatim API response.
    pub fn raw_file_name(date: NaiveDate) -> String {
        format!("raw-views-{}.txt", date.format("%Y-%m-%d"))
    }

    /// File name of the line-delimited JSON records.
    pub fn views_file_name(date: NaiveDate) -> String {
        format!("views-{}.json", date.format("%Y-%m-%d"))
    }

    /// Local path of the raw response, relative to the data directory.
    pub fn raw_local_path(date: NaiveDate) -> String {
        format!("{RAW_DIR}/{}", raw_file_name(date))
    }

    /// Local path of the JSON lines file, relative to the data directory.
    pub fn views_local_path(date: NaiveDate) -> String {
        format!("{VIEWS_DIR}/{}", views_file_name(date))
    }

    /// Object key of the raw response.
    pub fn raw_object_key(date: NaiveDate) -> String {
        format!("{RAW_KEY_PREFIX}/{}", raw_file_name(date))
    }

    /// Object key of the JSON lines file.
    pub fn views_object_key(date: NaiveDate) -> String {
        format!("{VIEWS_KEY_PREFIX}/{}", views_file_name(date))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn date() -> NaiveDate {
            NaiveDate::from_ymd_opt(2023, 10, 21).unwrap()
        }

        #[test]
        fn raw_names_encode_the_same_date() {
            let file = raw_file_name(date());
            assert_eq!(file, "raw-views-2023-10-21.txt");
            assert_eq!(raw_object_key(date()), format!("datalake/raw/{file}"));
            assert_eq!(raw_local_path(date()), format!("raw-views/{file}"));
        }

        #[test]
        fn views_names_encode_the_same_date() {
            let file = views_file_name(date());
            assert_eq!(file, "views-2023-10-21.json");
            assert_eq!(views_object_key(date()), format!("datalake/views/{file}"));
            assert_eq!(views_local_path(date()), format!("views/{file}"));
        }

        #[test]
        fn names_zero_pad_month_and_day() {
            let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            assert_eq!(raw_file_name(d), "raw-views-2024-03-05.txt");
            assert_eq!(views_file_name(d), "views-2024-03-05.json");
        }
    }
}
