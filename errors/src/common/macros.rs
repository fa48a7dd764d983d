// Copyright (C) 2024-2026 Aleo Systems Inc.
// This file is part of the FTL library.

// The FTL library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The FTL library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the FTL library. If not, see <https://www.gnu.org/licenses/>.

/// Generates an error type from a catalog of error definitions.
///
/// Each `@formatted` entry becomes a constructor method named after the
/// entry. The constructor renders the `msg` template with the given
/// arguments, stringifies the arguments in order, and formats the numeric
/// `code` as the catalog prefix plus a zero-padded four-digit number.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_prefix: $code_prefix:literal,

        $(
            $(#[$docs:meta])*
            @formatted
            $name:ident {
                args: ( $( $arg_name:ident: $arg_ty:ty ),* $(,)? ),
                msg: $msg:expr,
                code: $code:expr,
            }
        )*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
        #[error("[{code}]: {message}")]
        pub struct $type_ {
            /// The catalog code, e.g. `E0003`.
            pub code: String,
            /// The positional arguments the message template was rendered with.
            pub args: Vec<String>,
            /// The rendered human-readable message.
            pub message: String,
        }

        impl $type_ {
            /// Formats a numeric code as the catalog prefix plus a
            /// zero-padded four-digit number.
            pub fn format_code(code: u32) -> String {
                format!("{}{:0>4}", $code_prefix, code)
            }

            $(
                $(#[$docs])*
                pub fn $name( $( $arg_name: $arg_ty ),* ) -> Self {
                    let message = $msg;
                    Self {
                        code: Self::format_code($code),
                        args: vec![ $( $arg_name.to_string() ),* ],
                        message,
                    }
                }
            )*
        }
    };
}
