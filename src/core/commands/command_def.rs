// src/core/commands/command_def.rs

//! The `define_commands!` macro.
//!
//! Each entry `(Variant, Struct, module)` produces a `Command::Variant` wrapping
//! `module::Struct`, plus a row in the command table built from the struct's
//! `Default` instance. Every command struct must implement `Default`,
//! `ParseCommand`, `ExecutableCommand` and `CommandSpec`.

macro_rules! define_commands {
    ( $( ($variant:ident, $cmd:ident, $module:ident) ),* $(,)? ) => {
        /// A parsed command invocation, ready to be routed and executed.
        #[derive(Debug, Clone)]
        pub enum Command {
            $( $variant($module::$cmd), )*
        }

        impl Command {
            /// The lower-case command name.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Command::$variant(c) => CommandSpec::name(c), )*
                }
            }

            /// The command's arguments, excluding the name.
            pub fn get_resp_args(&self) -> Vec<Bytes> {
                match self {
                    $( Command::$variant(c) => CommandSpec::to_resp_args(c), )*
                }
            }
        }

        /// One command table row per command type.
        pub(crate) fn command_infos() -> Vec<command_table::CommandInfo> {
            vec![
                $(
                    command_table::CommandInfo::from_spec(
                        &<$module::$cmd>::default(),
                        |args| {
                            <$module::$cmd as ParseCommand>::parse(args).map(Command::$variant)
                        },
                    ),
                )*
            ]
        }

        #[async_trait]
        impl CommandExt for Command {
            fn get_flags(&self) -> CommandFlags {
                match self {
                    $( Command::$variant(c) => CommandSpec::flags(c), )*
                }
            }

            fn get_keys(&self) -> Vec<Bytes> {
                match self {
                    $( Command::$variant(c) => CommandSpec::get_keys(c), )*
                }
            }

            async fn execute<'a>(
                &self,
                ctx: &mut ExecutionContext<'a>,
            ) -> Result<(RespValue, WriteOutcome), ListDbError> {
                match self {
                    $( Command::$variant(c) => ExecutableCommand::execute(c, ctx).await, )*
                }
            }
        }
    };
}
