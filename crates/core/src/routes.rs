//! Canonical route table.
//!
//! ```text
//! /dashboard/home                 -> Home
//! /dashboard/tasks                -> Tasks
//! /dashboard/settings             -> Settings
//! /dashboard/projects             -> Projects
//! /dashboard/projects/new         -> NewProject
//! /dashboard/projects/{id}        -> ProjectDetail
//! /dashboard/projects/{id}/edit   -> EditProject
//! /auth/sign-in                   -> SignIn
//! /auth/sign-up                   -> SignUp
//! ```
//!
//! `/` resolves to `Home`.
//!
//! An id only routes when it is a plain path segment: not empty, not `.` or
//! `..`, not the reserved `new`, and free of `/`, `?`, `#` and `%`. Build
//! project routes through [`Route::project_detail`] and
//! [`Route::edit_project`] so every path parses back to the same route.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::ProjectId;

/// Path segment reserved for the create form; never treated as an id.
const NEW_SEGMENT: &str = "new";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Tasks,
    Settings,
    Projects,
    NewProject,
    /// Id must satisfy [`Route::is_routable`].
    ProjectDetail(ProjectId),
    /// Id must satisfy [`Route::is_routable`].
    EditProject(ProjectId),
    SignIn,
    SignUp,
}

impl Route {
    pub fn project_detail(id: &ProjectId) -> Result<Self, CoreError> {
        Self::check_id(id)?;
        Ok(Route::ProjectDetail(id.clone()))
    }

    pub fn edit_project(id: &ProjectId) -> Result<Self, CoreError> {
        Self::check_id(id)?;
        Ok(Route::EditProject(id.clone()))
    }

    /// Whether `id` survives a trip through [`Route::path`] and back.
    pub fn is_routable(id: &ProjectId) -> bool {
        let id = id.as_str();
        !matches!(id, "" | "." | ".." | NEW_SEGMENT)
            && !id.contains(['/', '?', '#', '%'])
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/dashboard/home".to_string(),
            Route::Tasks => "/dashboard/tasks".to_string(),
            Route::Settings => "/dashboard/settings".to_string(),
            Route::Projects => "/dashboard/projects".to_string(),
            Route::NewProject => format!("/dashboard/projects/{NEW_SEGMENT}"),
            Route::ProjectDetail(id) => format!("/dashboard/projects/{id}"),
            Route::EditProject(id) => format!("/dashboard/projects/{id}/edit"),
            Route::SignIn => "/auth/sign-in".to_string(),
            Route::SignUp => "/auth/sign-up".to_string(),
        }
    }

    /// The project a route refers to, if any.
    pub fn project_id(&self) -> Option<&ProjectId> {
        match self {
            Route::ProjectDetail(id) | Route::EditProject(id) => Some(id),
            _ => None,
        }
    }

    fn check_id(id: &ProjectId) -> Result<(), CoreError> {
        if Self::is_routable(id) {
            Ok(())
        } else {
            Err(CoreError::UnroutableId(id.as_str().to_string()))
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["dashboard", "home"] => Route::Home,
            ["dashboard", "tasks"] => Route::Tasks,
            ["dashboard", "settings"] => Route::Settings,
            ["dashboard", "projects"] => Route::Projects,
            ["dashboard", "projects", seg] if *seg == NEW_SEGMENT => Route::NewProject,
            ["dashboard", "projects", id] => Route::ProjectDetail(ProjectId::new(*id)),
            ["dashboard", "projects", id, "edit"] if *id != NEW_SEGMENT => {
                Route::EditProject(ProjectId::new(*id))
            }
            ["auth", "sign-in"] => Route::SignIn,
            ["auth", "sign-up"] => Route::SignUp,
            _ => return Err(CoreError::UnknownRoute(path.to_string())),
        };
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_route_parses_back_from_its_path() {
        let id = ProjectId::new("0b6f2d8e");
        let routes = [
            Route::Home,
            Route::Tasks,
            Route::Settings,
            Route::Projects,
            Route::NewProject,
            Route::ProjectDetail(id.clone()),
            Route::EditProject(id),
            Route::SignIn,
            Route::SignUp,
        ];
        for route in routes {
            assert_eq!(route.path().parse::<Route>(), Ok(route.clone()), "{route}");
        }
    }

    #[test]
    fn new_segment_is_not_an_id() {
        assert_eq!("/dashboard/projects/new".parse::<Route>(), Ok(Route::NewProject));
        assert!("/dashboard/projects/new/edit".parse::<Route>().is_err());
    }

    #[test]
    fn reserved_and_path_like_ids_are_rejected() {
        for raw in ["new", "", ".", "..", "a/b", "a?b", "a#b", "a%2F"] {
            let id = ProjectId::new(raw);
            assert!(!Route::is_routable(&id), "{raw:?}");
            assert_matches!(Route::project_detail(&id), Err(CoreError::UnroutableId(_)));
            assert_matches!(Route::edit_project(&id), Err(CoreError::UnroutableId(_)));
        }
    }

    #[test]
    fn checked_routes_parse_back() {
        let id = ProjectId::new("00000000-0000-0000-0000-000000000001");
        for route in [
            Route::project_detail(&id).unwrap(),
            Route::edit_project(&id).unwrap(),
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route.clone()));
        }
    }

    #[test]
    fn root_and_trailing_slashes() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/dashboard/projects/".parse::<Route>(), Ok(Route::Projects));
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert_matches!(
            "/dashboard/projects/newProject/extra".parse::<Route>(),
            Err(CoreError::UnknownRoute(_))
        );
    }

    #[test]
    fn project_id_of_detail_route() {
        let route = Route::EditProject(ProjectId::new("abc"));
        assert_eq!(route.project_id().map(ProjectId::as_str), Some("abc"));
        assert_eq!(Route::Projects.project_id(), None);
    }
}
