// Wall-clock timestamps for results, metrics and streamed events

pub trait Clock {
    fn timestamp() -> i64;
    fn rfc3339() -> String;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp() -> i64 {
        #[cfg(miri)]
        {
            0
        }
        #[cfg(not(miri))]
        {
            chrono::Utc::now().timestamp()
        }
    }

    fn rfc3339() -> String {
        #[cfg(miri)]
        {
            "1970-01-01T00:00:00+00:00".to_string()
        }
        #[cfg(not(miri))]
        {
            chrono::Utc::now().to_rfc3339()
        }
    }
}

pub fn now_timestamp() -> i64 {
    SystemClock::timestamp()
}

pub fn now_rfc3339() -> String {
    SystemClock::rfc3339()
}
