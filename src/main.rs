use std::process::ExitCode;

use color_eyre::eyre::Result;
use flm::{
    AddMemberUseCase, ClientContext, ClientSettings, CreateGroupUseCase, FetchMessagesUseCase,
    FileKeyValueStore, GroupId, HistoryNavigator, LoginForm, LoginUseCase, LogoutUseCase,
    Notification, NotificationQueue, Registration, Secret, SignupUseCase, UserId,
    VecNotificationQueue, init_tracing,
};

type Context = ClientContext<FileKeyValueStore, HistoryNavigator>;

const USAGE: &str = "usage: flm <command>

commands:
  login <username> <password>
  register <firstname> <lastname> <email> <password>
  logout
  whoami
  create-group <name>
  messages <group-id>
  add-member <group-id> <user-id>
  probe";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ClientSettings::load()?;
    let storage = FileKeyValueStore::new(settings.storage.path.clone());
    let context = ClientContext::new(settings, storage, HistoryNavigator::new())?;
    let notifications = VecNotificationQueue::new();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let Some(succeeded) = run(&context, &notifications, &args).await? else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    for record in notifications.drain().await {
        println!("[{:?}] {}", record.severity(), record.message());
    }
    if let Some(location) = context.navigator().current().await {
        println!("-> {}", location.path);
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one command. `None` means the arguments were not understood;
/// otherwise whether the operation succeeded. Failures are already in the
/// notification queue.
async fn run(
    context: &Context,
    notifications: &VecNotificationQueue,
    args: &[&str],
) -> Result<Option<bool>> {
    let service = context.auth_service();
    let navigator = context.navigator().clone();
    let routes = &context.settings().routes;

    let succeeded = match args {
        ["login", username, password] => {
            let mut form = LoginForm::new(*username, *password);
            LoginUseCase::new(
                service,
                context.session_store().clone(),
                notifications.clone(),
                navigator,
                routes.home_path.clone(),
            )
            .execute(&mut form)
            .await
            .is_ok()
        }
        ["register", firstname, lastname, email, password] => {
            let registration = Registration::new(
                *firstname,
                *lastname,
                *email,
                Secret::new(password.to_string()),
            );
            SignupUseCase::new(
                service,
                notifications.clone(),
                navigator,
                routes.login_path.clone(),
            )
            .execute(registration)
            .await
            .is_ok()
        }
        ["logout"] => LogoutUseCase::new(
            service,
            notifications.clone(),
            navigator,
            routes.login_path.clone(),
        )
        .execute()
        .await
        .is_ok(),
        ["whoami"] => {
            match context.session_store().get().await? {
                Some(session) => {
                    println!("{}", session.profile.username().unwrap_or("(unnamed)"))
                }
                None => println!("not signed in"),
            }
            true
        }
        ["create-group", name] => CreateGroupUseCase::new(
            service,
            notifications.clone(),
            navigator,
            routes.messages_path.clone(),
        )
        .execute(name)
        .await
        .is_ok(),
        ["messages", group_id] => {
            match FetchMessagesUseCase::new(service, notifications.clone())
                .execute(&GroupId::new(*group_id))
                .await
            {
                Ok(messages) => {
                    for message in messages {
                        println!("{message}");
                    }
                    true
                }
                Err(_) => false,
            }
        }
        ["add-member", group_id, user_id] => AddMemberUseCase::new(service, notifications.clone())
            .execute(&UserId::new(*user_id), &GroupId::new(*group_id))
            .await
            .is_ok(),
        ["probe"] => match service.test_route().await {
            Ok(payload) => {
                println!("{payload}");
                true
            }
            Err(error) => {
                notifications
                    .append(Notification::error(error.message()))
                    .await;
                false
            }
        },
        _ => return Ok(None),
    };

    Ok(Some(succeeded))
}
