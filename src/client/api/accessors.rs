use serde_json::Value;

use crate::{
    client::{
        api::{endpoint::Operation, fixture::FixtureSource, transport::Transport, ApiClient},
        error::ApiError,
        notify::Notifier,
    },
    model::api::{LoginForm, TokenDto},
};

impl<T, F, N> ApiClient<T, F, N>
where
    T: Transport,
    F: FixtureSource,
    N: Notifier,
{
    /// Exchange credentials for an access token.
    ///
    /// In test mode the credentials are not checked, the login fixture is
    /// returned as is.
    pub async fn login(&self, form: &LoginForm) -> Result<TokenDto, ApiError> {
        self.call(
            Operation::Login,
            &[
                ("username", form.username.as_str()),
                ("password", form.password.as_str()),
            ],
        )
        .await
    }

    /// Every user record, passed through as the API returns it
    pub async fn get_users(&self) -> Result<Value, ApiError> {
        self.call(Operation::GetUsers, &[]).await
    }

    /// Activities selected for a single user
    pub async fn get_user_activities(&self, user_id: &str) -> Result<Value, ApiError> {
        self.call(Operation::GetUserActivities, &[("user_id", user_id)])
            .await
    }

    /// Activities selected for a group
    pub async fn get_group_activities(&self, group_name: &str) -> Result<Value, ApiError> {
        self.call(Operation::GetGroupActivities, &[("group_name", group_name)])
            .await
    }

    pub async fn get_all_activities(&self) -> Result<Value, ApiError> {
        self.call(Operation::GetAllActivities, &[]).await
    }

    /// Details of an activity, looked up by its free-text name
    pub async fn get_activity_information(&self, activity_name: &str) -> Result<Value, ApiError> {
        self.call(
            Operation::GetActivityInformation,
            &[("activity_name", activity_name)],
        )
        .await
    }

    pub async fn get_activity_review(&self, activity_id: &str) -> Result<Value, ApiError> {
        self.call(Operation::GetActivityReview, &[("activity_id", activity_id)])
            .await
    }

    /// Parental permission entries for an activity
    pub async fn get_activity_permissions(&self, activity_id: &str) -> Result<Value, ApiError> {
        self.call(
            Operation::GetActivityPermissions,
            &[("activity_id", activity_id)],
        )
        .await
    }

    /// Needs identified for a group
    pub async fn get_needs(&self, group_name: &str) -> Result<Value, ApiError> {
        self.call(Operation::GetNeeds, &[("group_name", group_name)])
            .await
    }
}
