use crate::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};

const MYSQL_PORT: u16 = 3306;
const DATABASE: &str = "hopper";
const USER: &str = "hopper";
const PASSWORD: &str = "hopper";

/// A throwaway MySQL 8.4 server holding one empty `hopper` database.
///
/// The container is stopped when this value is dropped.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
}

impl MySqlServer {
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("mysql", "8.4")
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", DATABASE)
            .with_env_var("MYSQL_USER", USER)
            .with_env_var("MYSQL_PASSWORD", PASSWORD)
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container })
    }

    /// `mysql://` DSN pointing at the mapped host port.
    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(format!("mysql://{USER}:{PASSWORD}@{host}:{port}/{DATABASE}"))
    }
}
