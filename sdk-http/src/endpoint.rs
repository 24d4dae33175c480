/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_types::BuildError;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    /// Reads `AWS_REGION`, then `AWS_DEFAULT_REGION`, from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// [`Region::from_env`] against an arbitrary variable lookup. Empty values are ignored.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(Region::new)
    }
}

/// The base URI requests are sent to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,
}

impl Endpoint {
    /// Use `uri` exactly as given, ignoring region and service prefix.
    pub fn immutable(uri: http::Uri) -> Self {
        Endpoint { uri }
    }

    /// The regional endpoint `https://{prefix}.{region}.amazonaws.com`; China regions
    /// use the `amazonaws.com.cn` domain.
    pub fn resolve(endpoint_prefix: &str, region: &Region) -> Result<Self, BuildError> {
        let region = region.as_ref();
        let suffix = if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = format!("https://{}.{}.{}", endpoint_prefix, region, suffix);
        let uri = uri
            .parse::<http::Uri>()
            .map_err(|err| BuildError::InvalidUri(format!("{}: {}", uri, err)))?;
        Ok(Endpoint { uri })
    }

    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Joins the operation's path and query onto this endpoint.
    ///
    /// A path on the endpoint itself (as with a proxy or local test server) is kept as a prefix.
    pub fn apply(&self, path_and_query: &str) -> Result<http::Uri, BuildError> {
        let scheme = self.uri.scheme_str().unwrap_or("https");
        let authority = self
            .uri
            .authority()
            .ok_or_else(|| BuildError::InvalidUri(format!("endpoint `{}` has no host", self.uri)))?;
        let base_path = self.uri.path().trim_end_matches('/');
        let uri = format!("{}://{}{}{}", scheme, authority, base_path, path_and_query);
        uri.parse::<http::Uri>()
            .map_err(|err| BuildError::InvalidUri(format!("{}: {}", uri, err)))
    }
}

#[cfg(test)]
mod test {
    use super::{Endpoint, Region};
    use std::collections::HashMap;

    #[test]
    fn regional_endpoints() {
        let endpoint = Endpoint::resolve("fms", &Region::from_static("us-west-2")).unwrap();
        assert_eq!(endpoint.uri(), "https://fms.us-west-2.amazonaws.com/");
        let endpoint = Endpoint::resolve("securityhub", &Region::new("cn-north-1")).unwrap();
        assert_eq!(endpoint.uri(), "https://securityhub.cn-north-1.amazonaws.com.cn/");
        assert!(Endpoint::resolve("fms", &Region::new("bad region")).is_err());
    }

    #[test]
    fn apply_paths() {
        let endpoint = Endpoint::resolve("securityhub", &Region::new("us-east-1")).unwrap();
        assert_eq!(
            endpoint.apply("/members?MaxResults=5").unwrap(),
            "https://securityhub.us-east-1.amazonaws.com/members?MaxResults=5"
        );
        let local = Endpoint::immutable(http::Uri::from_static("http://localhost:8080/proxy/"));
        assert_eq!(
            local.apply("/findings").unwrap(),
            "http://localhost:8080/proxy/findings"
        );
        let hostless = Endpoint::immutable(http::Uri::from_static("/relative"));
        assert!(hostless.apply("/").is_err());
    }

    #[test]
    fn region_from_env() {
        let env: HashMap<&str, &str> =
            vec![("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]
                .into_iter()
                .collect();
        let region = Region::from_env_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(region, Some(Region::from_static("eu-west-1")));
        assert_eq!(Region::from_env_with(|_| None), None);
        let preferred = Region::from_env_with(|key| Some(key.to_lowercase()));
        assert_eq!(preferred.unwrap().as_ref(), "aws_region");
    }
}
