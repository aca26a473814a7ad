//! Static endpoint table.
//!
//! Every named accessor maps to one [`EndpointSpec`] describing the live request
//! (method, path template, query parameters, body shape) and the fixture file
//! read in test mode. The table is checked once by [`EndpointTable::validate`]
//! when the client is built.

use crate::client::{
    api::transport::{Method, RequestOptions},
    error::{ApiError, ConfigError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    GetUsers,
    GetUserActivities,
    GetGroupActivities,
    GetAllActivities,
    GetActivityInformation,
    GetActivityReview,
    GetActivityPermissions,
    GetNeeds,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Login,
        Operation::GetUsers,
        Operation::GetUserActivities,
        Operation::GetGroupActivities,
        Operation::GetAllActivities,
        Operation::GetActivityInformation,
        Operation::GetActivityReview,
        Operation::GetActivityPermissions,
        Operation::GetNeeds,
    ];
}

/// Request body layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    None,
    /// Form-urlencoded body built from the named parameters, in order
    Form(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub operation: Operation,
    pub method: Method,
    /// Path template, `{name}` segments are substituted from the call arguments
    pub path: &'static str,
    pub query: &'static [&'static str],
    pub body: BodyShape,
    /// File read from the fixture root in test mode
    pub fixture: &'static str,
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec {
        operation: Operation::Login,
        method: Method::Post,
        path: "/login",
        query: &[],
        body: BodyShape::Form(&["username", "password"]),
        fixture: "login_fallback.json",
    },
    EndpointSpec {
        operation: Operation::GetUsers,
        method: Method::Get,
        path: "/users",
        query: &[],
        body: BodyShape::None,
        fixture: "user-examples.json",
    },
    EndpointSpec {
        operation: Operation::GetUserActivities,
        method: Method::Get,
        path: "/selectedactivities/user/{user_id}",
        query: &[],
        body: BodyShape::None,
        fixture: "user_activities.json",
    },
    EndpointSpec {
        operation: Operation::GetGroupActivities,
        method: Method::Get,
        path: "/selectedactivities/group/{group_name}",
        query: &[],
        body: BodyShape::None,
        fixture: "group_activities.json",
    },
    EndpointSpec {
        operation: Operation::GetAllActivities,
        method: Method::Get,
        path: "/activity-all",
        query: &[],
        body: BodyShape::None,
        fixture: "example-activity-list.json",
    },
    EndpointSpec {
        operation: Operation::GetActivityInformation,
        method: Method::Get,
        path: "/activity-information",
        query: &["activity_name"],
        body: BodyShape::None,
        fixture: "local-activities.json",
    },
    EndpointSpec {
        operation: Operation::GetActivityReview,
        method: Method::Get,
        path: "/activity-review",
        query: &["activity_id"],
        body: BodyShape::None,
        fixture: "example-activity-list.json",
    },
    EndpointSpec {
        operation: Operation::GetActivityPermissions,
        method: Method::Get,
        path: "/activity-permissions",
        query: &["activity_id"],
        body: BodyShape::None,
        fixture: "parental-activity-examples.json",
    },
    EndpointSpec {
        operation: Operation::GetNeeds,
        method: Method::Get,
        path: "/identified-needs/{group_name}",
        query: &[],
        body: BodyShape::None,
        fixture: "needs.json",
    },
];

/// Call arguments, looked up by parameter name
pub type EndpointArgs<'a> = [(&'a str, &'a str)];

fn arg<'a>(args: &'a EndpointArgs<'a>, name: &str) -> Result<&'a str, ApiError> {
    args.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| ApiError::MissingParam(name.to_string()))
}

/// Placeholder name of a path segment, if it is one
fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

impl EndpointSpec {
    /// Render the path and query string with the arguments substituted.
    ///
    /// Path parameters are percent-encoded as a single segment, query
    /// parameters are form-urlencoded.
    pub fn render(&self, args: &EndpointArgs) -> Result<String, ApiError> {
        let segments = self
            .path
            .split('/')
            .map(|segment| match placeholder(segment) {
                Some(name) => arg(args, name).map(|value| urlencoding::encode(value).into_owned()),
                None => Ok(segment.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut endpoint = segments.join("/");

        if !self.query.is_empty() {
            let pairs = self
                .query
                .iter()
                .map(|name| arg(args, name).map(|value| (*name, value)))
                .collect::<Result<Vec<_>, _>>()?;

            endpoint.push('?');
            endpoint.push_str(&serde_urlencoded::to_string(pairs)?);
        }

        Ok(endpoint)
    }

    /// Build the request options for a live call
    pub fn options(&self, args: &EndpointArgs) -> Result<RequestOptions, ApiError> {
        match self.body {
            BodyShape::None => Ok(RequestOptions {
                method: self.method,
                ..RequestOptions::default()
            }),
            BodyShape::Form(fields) => {
                let pairs = fields
                    .iter()
                    .map(|name| arg(args, name).map(|value| (*name, value)))
                    .collect::<Result<Vec<_>, _>>()?;

                let mut options = RequestOptions::form(serde_urlencoded::to_string(pairs)?);
                options.method = self.method;
                Ok(options)
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            operation: self.operation,
            reason,
        };

        if !self.path.starts_with('/') {
            return Err(invalid(format!("path {:?} must start with '/'", self.path)));
        }
        if self.fixture.is_empty() || !self.fixture.ends_with(".json") {
            return Err(invalid(format!(
                "fixture {:?} must name a .json file",
                self.fixture
            )));
        }

        let mut names: Vec<&str> = Vec::new();
        for segment in self.path.split('/') {
            match placeholder(segment) {
                Some(name) if name.is_empty() || name.contains(['{', '}']) => {
                    return Err(invalid(format!("malformed placeholder {:?}", segment)));
                }
                Some(name) => names.push(name),
                None if segment.contains(['{', '}']) => {
                    return Err(invalid(format!("malformed placeholder {:?}", segment)));
                }
                None => {}
            }
        }
        names.extend(self.query.iter().copied());
        if let BodyShape::Form(fields) = self.body {
            names.extend(fields.iter().copied());
        }

        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(invalid("empty parameter name".to_string()));
            }
            if names[..i].contains(name) {
                return Err(invalid(format!("parameter {:?} is declared twice", name)));
            }
        }

        Ok(())
    }
}

/// Endpoint table checked for completeness and well-formed entries
#[derive(Debug, Clone)]
pub struct EndpointTable {
    // Indexed by position in `Operation::ALL`
    specs: Vec<&'static EndpointSpec>,
}

impl EndpointTable {
    /// Validate the built-in [`ENDPOINTS`] table
    pub fn load() -> Result<Self, ConfigError> {
        Self::validate(ENDPOINTS)
    }

    /// Validate a table: one well-formed entry per operation
    pub fn validate(table: &'static [EndpointSpec]) -> Result<Self, ConfigError> {
        let mut specs = Vec::with_capacity(Operation::ALL.len());

        for operation in Operation::ALL {
            let mut matches = table.iter().filter(|spec| spec.operation == operation);

            let spec = matches
                .next()
                .ok_or(ConfigError::MissingEndpoint(operation))?;
            if matches.next().is_some() {
                return Err(ConfigError::DuplicateEndpoint(operation));
            }

            spec.validate()?;
            specs.push(spec);
        }

        Ok(Self { specs })
    }

    pub fn get(&self, operation: Operation) -> &'static EndpointSpec {
        // `Operation::ALL` lists variants in declaration order
        self.specs[operation as usize]
    }
}
