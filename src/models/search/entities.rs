use serde::Serialize;

use crate::models::courses::entities::Course;
use crate::models::lectures::entities::Lecture;
use crate::models::users::responses::UserSummary;

// 可搜索的模块
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchModule {
    Lectures,
    Courses,
    Users,
}

impl std::str::FromStr for SearchModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lectures" => Ok(SearchModule::Lectures),
            "courses" => Ok(SearchModule::Courses),
            "users" => Ok(SearchModule::Users),
            _ => Err(format!(
                "Unknown search module: '{s}'. Supported modules: lectures, courses, users"
            )),
        }
    }
}

// 搜索结果，按模块返回对应的单表行
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Lectures(Vec<Lecture>),
    Courses(Vec<Course>),
    Users(Vec<UserSummary>),
}

impl SearchResults {
    pub fn empty(module: SearchModule) -> Self {
        match module {
            SearchModule::Lectures => SearchResults::Lectures(Vec::new()),
            SearchModule::Courses => SearchResults::Courses(Vec::new()),
            SearchModule::Users => SearchResults::Users(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResults::Lectures(items) => items.len(),
            SearchResults::Courses(items) => items.len(),
            SearchResults::Users(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module() {
        assert_eq!(
            "lectures".parse::<SearchModule>().unwrap(),
            SearchModule::Lectures
        );
        assert_eq!("users".parse::<SearchModule>().unwrap(), SearchModule::Users);
        assert!("grades".parse::<SearchModule>().is_err());
        assert!("Courses".parse::<SearchModule>().is_err());
    }

    #[test]
    fn test_empty_results_serialize_as_array() {
        let json = serde_json::to_string(&SearchResults::empty(SearchModule::Courses)).unwrap();
        assert_eq!(json, "[]");
    }
}
