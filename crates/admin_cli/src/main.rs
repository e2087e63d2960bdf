use std::error::Error;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::Print,
    terminal,
};
use engine::{credentials, usuarios};
use migration::MigratorTrait;
use sea_orm::{
    ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Parser, Debug)]
#[command(name = "alcancia_admin")]
#[command(about = "Utilidades de administración de Alcancía (gestión de usuarios)")]
struct Cli {
    /// Cadena de conexión a la base de datos (también se lee de `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./alcancia.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
    Deactivate(UserSelectArgs),
    List,
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    /// Nombre de usuario para iniciar sesión.
    #[arg(long)]
    nombre_usuario: String,
    /// Nombre para mostrar.
    #[arg(long)]
    nombre: String,
    #[arg(long, default_value = "Admin")]
    rol: String,
}

#[derive(Args, Debug)]
struct UserSelectArgs {
    #[arg(long)]
    nombre_usuario: String,
}

struct ModoCrudo;

impl ModoCrudo {
    fn activar() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for ModoCrudo {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Lee una contraseña por stderr mostrando `*` por cada tecla.
fn leer_contrasena(mensaje: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let _crudo = ModoCrudo::activar()?;
    let mut err = std::io::stderr();
    execute!(err, Print(mensaje))?;

    let mut contrasena = String::new();
    loop {
        let tecla = match event::read()? {
            Event::Key(tecla) => tecla,
            _ => continue,
        };

        if tecla.modifiers.contains(KeyModifiers::CONTROL) {
            if tecla.code == KeyCode::Char('c') {
                execute!(err, Print("\r\n"))?;
                return Err("interrumpido".into());
            }
            continue;
        }

        match tecla.code {
            KeyCode::Enter => {
                execute!(err, Print("\r\n"))?;
                return Ok(contrasena);
            }
            KeyCode::Backspace if !contrasena.is_empty() => {
                contrasena.pop();
                execute!(err, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
            }
            KeyCode::Char(c) => {
                contrasena.push(c);
                execute!(err, Print('*'))?;
            }
            _ => {}
        }
    }
}

fn pedir_contrasena() -> Result<String, Box<dyn Error + Send + Sync>> {
    for _ in 0..3 {
        let primera = leer_contrasena("Contraseña: ")?;
        if primera.is_empty() {
            eprintln!("La contraseña no puede estar vacía.");
            continue;
        }
        if primera == leer_contrasena("Confirme la contraseña: ")? {
            return Ok(primera);
        }
        eprintln!("Las contraseñas no coinciden. Intente de nuevo.");
    }

    Err("demasiados intentos".into())
}

async fn conectar(url: &str) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn buscar_usuario(
    db: &DatabaseConnection,
    nombre_usuario: &str,
) -> Result<Option<usuarios::Model>, Box<dyn Error + Send + Sync>> {
    let usuario = usuarios::Entity::find()
        .filter(usuarios::Column::NombreUsuario.eq(nombre_usuario))
        .one(db)
        .await?;
    Ok(usuario)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = conectar(&cli.database_url).await?;

    match cli.command {
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            if buscar_usuario(&db, &args.nombre_usuario).await?.is_some() {
                eprintln!("el usuario ya existe: {}", args.nombre_usuario);
                std::process::exit(1);
            }

            let contrasena = pedir_contrasena()?;

            let usuario = usuarios::ActiveModel {
                nombre_usuario: Set(args.nombre_usuario.clone()),
                contrasena: Set(credentials::digest(&contrasena)),
                nombre: Set(args.nombre),
                rol: Set(args.rol),
                activo: Set(true),
                ..Default::default()
            };
            usuarios::Entity::insert(usuario).exec(&db).await?;

            println!("usuario creado: {}", args.nombre_usuario);
        }
        Command::User(User {
            command: UserCommand::Deactivate(args),
        }) => {
            let Some(usuario) = buscar_usuario(&db, &args.nombre_usuario).await? else {
                eprintln!("no existe el usuario: {}", args.nombre_usuario);
                std::process::exit(1);
            };

            let cambio = usuarios::ActiveModel {
                id: Set(usuario.id),
                activo: Set(false),
                ..Default::default()
            };
            usuarios::Entity::update(cambio).exec(&db).await?;

            println!("usuario desactivado: {}", args.nombre_usuario);
        }
        Command::User(User {
            command: UserCommand::List,
        }) => {
            let lista = usuarios::Entity::find()
                .order_by_asc(usuarios::Column::NombreUsuario)
                .all(&db)
                .await?;

            if lista.is_empty() {
                println!("sin usuarios");
            }
            for usuario in lista {
                let estado = if usuario.activo { "activo" } else { "inactivo" };
                println!(
                    "{:>4}  {:<24}  {:<12}  {}",
                    usuario.id, usuario.nombre_usuario, usuario.rol, estado
                );
            }
        }
    }

    Ok(())
}
