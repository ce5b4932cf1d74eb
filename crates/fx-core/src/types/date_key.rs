//! 날짜 키와 조회 기간 정의.
//!
//! 환율 API는 `dd.mm.yyyy` 형식의 날짜 문자열을 요청 파라미터로 받습니다.
//! 같은 문자열이 캐시 키이자 출력 JSON의 키로도 사용됩니다.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// `dd.mm.yyyy` 형식으로 표현되는 달력 날짜.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// 요청/출력에 사용하는 날짜 형식
    pub const FORMAT: &'static str = "%d.%m.%Y";

    /// 달력 날짜로부터 키를 생성합니다.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 연/월/일로부터 키를 생성합니다.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDateKey(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    /// 로컬 시간대 기준 오늘 날짜.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// 내부 달력 날짜를 반환합니다.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 하루 전 날짜. 달력의 최소값에서는 `None`.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| CoreError::InvalidDateKey(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// 조회 일수 (1-10일).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCount(u8);

impl DayCount {
    /// 최소 조회 일수
    pub const MIN: u8 = 1;
    /// 최대 조회 일수
    pub const MAX: u8 = 10;

    /// 범위를 검증하여 생성합니다.
    pub fn new(days: u8) -> CoreResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(CoreError::InvalidDayCount(days.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl FromStr for DayCount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u8 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidDayCount(s.to_string()))?;
        Self::new(days)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `anchor`부터 하루씩 거슬러 올라가는 `days`개의 날짜 키 (최신순).
pub fn trailing_dates(anchor: DateKey, days: DayCount) -> Vec<DateKey> {
    iter::successors(Some(anchor), DateKey::previous)
        .take(days.get() as usize)
        .collect()
}

/// 오늘을 기준으로 한 최근 `days`일의 날짜 키.
pub fn trailing_dates_from_today(days: DayCount) -> Vec<DateKey> {
    trailing_dates(DateKey::today(), days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_format() {
        let key = DateKey::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(key.to_string(), "05.03.2024");
        assert_eq!("05.03.2024".parse::<DateKey>().unwrap(), key);
        assert!("2024-03-05".parse::<DateKey>().is_err());
        assert!(DateKey::from_ymd(2024, 2, 30).is_err());
    }

    #[test]
    fn test_date_key_serde() {
        let key = DateKey::from_ymd(2014, 12, 1).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"01.12.2014\"");

        let parsed: DateKey = serde_json::from_str("\"01.12.2014\"").unwrap();
        assert_eq!(parsed, key);
        assert!(serde_json::from_str::<DateKey>("\"not a date\"").is_err());
    }

    #[test]
    fn test_day_count_bounds() {
        assert_eq!(DayCount::new(1).unwrap().get(), 1);
        assert_eq!(DayCount::new(10).unwrap().get(), 10);
        assert!(DayCount::new(0).is_err());
        assert!(DayCount::new(11).is_err());

        assert_eq!("7".parse::<DayCount>().unwrap().get(), 7);
        assert!("abc".parse::<DayCount>().is_err());
        assert!("-1".parse::<DayCount>().is_err());
        assert!("2.5".parse::<DayCount>().is_err());
        assert_eq!(DayCount::default().get(), 1);
    }

    #[test]
    fn test_trailing_dates_steps_back_one_day() {
        let anchor = DateKey::from_ymd(2024, 3, 2).unwrap();
        let dates = trailing_dates(anchor, DayCount::new(4).unwrap());

        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        // 윤년 2월 29일을 거쳐야 함
        assert_eq!(rendered, vec!["02.03.2024", "01.03.2024", "29.02.2024", "28.02.2024"]);

        for window in dates.windows(2) {
            assert_eq!(window[1].date().succ_opt().unwrap(), window[0].date());
        }
    }

    #[test]
    fn test_trailing_dates_from_today() {
        let dates = trailing_dates_from_today(DayCount::new(10).unwrap());
        assert_eq!(dates.len(), 10);

        // 자정 경계에서 실행되는 경우를 허용
        let today = DateKey::today();
        assert!(dates[0] == today || today.previous() == Some(dates[0]));
    }

    #[test]
    fn test_single_day_range() {
        let anchor = DateKey::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(trailing_dates(anchor, DayCount::default()), vec![anchor]);
    }
}
