//
// Helpers for keeping a log of the User-agent headers that come asking for
// robots.txt. The crate only formats lines and hands them to a sink the
// host supplies, where those lines end up is the host's business.

use chrono::{ DateTime, Local };

/// Anywhere a log line can go. The host hands one of these in, anything
/// that accepts a finished line works.
pub trait LogSink {
    fn info( &mut self, line: &str );
}

/// How the timestamp half of a log entry is written.
#[derive( Debug, Clone, Copy, PartialEq, Eq )]
pub enum TimeFormat {
    /// "June 04, 2010 12:11"
    Long,
    /// "04 Jun 12:11"
    Short,
}

impl TimeFormat {

    fn pattern( self ) -> &'static str {
        match self {
            TimeFormat::Long => "%B %d, %Y %H:%M",
            TimeFormat::Short => "%d %b %H:%M",
        }
    }
}

impl Default for TimeFormat {
    fn default( ) -> TimeFormat {
        TimeFormat::Long
    }
}

/// One log entry: the user-agent and the formatted time, each quoted and
/// comma separated.
pub fn format_entry( user_agent: &str, time: DateTime< Local >, format: TimeFormat ) -> String {
    format!( "\"{}\", \"{}\"", user_agent, time.format( format.pattern( ) ) )
}

/// Stamps the current local time and writes one entry for the given
/// User-agent header to the sink.
pub fn log_user_agent< S: LogSink >( sink: &mut S, user_agent: &str, format: TimeFormat ) {
    sink.info( &format_entry( user_agent, Local::now( ), format ) );
}

/// A sink that forwards entries through `tracing` at info level under the
/// `user_agents` target, for hosts already collecting structured logs.
pub struct TracingSink;

impl LogSink for TracingSink {

    fn info( &mut self, line: &str ) {
        tracing::info!( target: "user_agents", "{}", line );
    }
}


/***********
 * Unit Tests
 ******/
#[cfg( test )]
mod tests {

    use super::*;
    use chrono::TimeZone;

    struct Recorder {
        lines: Vec< String >,
    }

    impl LogSink for Recorder {
        fn info( &mut self, line: &str ) {
            self.lines.push( line.to_string( ) );
        }
    }

    #[test]
    fn long_entries( ) {
        let time = Local.with_ymd_and_hms( 2010, 6, 4, 12, 11, 0 ).unwrap( );

        assert_eq!( format_entry( "Googlebot/2.1", time, TimeFormat::Long ),
                    "\"Googlebot/2.1\", \"June 04, 2010 12:11\"" );
    }

    #[test]
    fn short_entries( ) {
        let time = Local.with_ymd_and_hms( 2010, 6, 4, 12, 11, 0 ).unwrap( );

        assert_eq!( format_entry( "Googlebot/2.1", time, TimeFormat::Short ),
                    "\"Googlebot/2.1\", \"04 Jun 12:11\"" );
    }

    #[test]
    fn entries_reach_the_sink( ) {
        let mut sink = Recorder{ lines: Vec::new( ) };

        log_user_agent( &mut sink, "SpecialBot/0.1", TimeFormat::default( ) );

        assert_eq!( sink.lines.len( ), 1 );
        assert!( sink.lines[ 0 ].starts_with( "\"SpecialBot/0.1\", \"" ) );
        assert!( sink.lines[ 0 ].ends_with( "\"" ) );
    }
}
