//! IRC numeric reply codes as defined in RFC 1459/2812 and common use.
//!
//! Servers report command results as three-digit numerics. This module maps
//! between the numeric codes and their symbolic names, in both directions.
//! Lookups are pure and total: an unknown code or name is `None`, never an
//! error, because servers routinely send numerics we have no name for.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

#![allow(non_camel_case_types)]

macro_rules! numerics {
    ($($(#[$doc:meta])* $name:ident = $code:literal,)+) => {
        /// IRC server numeric reply.
        ///
        /// Numerics are loosely categorized: 001-099 registration, 200-399
        /// command replies, 400-599 errors, 600-999 extensions.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Response {
            $($(#[$doc])* $name = $code,)+
        }

        impl Response {
            /// The numeric code for this reply.
            #[inline]
            pub fn code(self) -> u16 {
                self as u16
            }

            /// Look up a reply by numeric code.
            pub fn from_code(code: u16) -> Option<Response> {
                match code {
                    $($code => Some(Response::$name),)+
                    _ => None,
                }
            }

            /// The symbolic name, e.g. `"RPL_WELCOME"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Response::$name => stringify!($name),)+
                }
            }

            /// Look up a reply by symbolic name.
            pub fn from_name(name: &str) -> Option<Response> {
                match name {
                    $(stringify!($name) => Some(Response::$name),)+
                    _ => None,
                }
            }
        }
    };
}

numerics! {
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,
    /// 005 - Server supported features (ISUPPORT)
    RPL_ISUPPORT = 5,
    /// 010 - Bounce to another server
    RPL_BOUNCE = 10,
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 251 - Luser client count
    RPL_LUSERCLIENT = 251,
    /// 252 - Luser operator count
    RPL_LUSEROP = 252,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN = 253,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS = 254,
    /// 255 - Luser local info
    RPL_LUSERME = 255,
    /// 256 - Admin info start
    RPL_ADMINME = 256,
    /// 257 - Admin location 1
    RPL_ADMINLOC1 = 257,
    /// 258 - Admin location 2
    RPL_ADMINLOC2 = 258,
    /// 259 - Admin email
    RPL_ADMINEMAIL = 259,
    /// 263 - Try again later
    RPL_TRYAGAIN = 263,
    /// 301 - User is away
    RPL_AWAY = 301,
    /// 302 - Userhost reply
    RPL_USERHOST = 302,
    /// 303 - Ison reply
    RPL_ISON = 303,
    /// 305 - No longer away
    RPL_UNAWAY = 305,
    /// 306 - Now marked away
    RPL_NOWAWAY = 306,
    /// 311 - Whois user info
    RPL_WHOISUSER = 311,
    /// 312 - Whois server info
    RPL_WHOISSERVER = 312,
    /// 313 - Whois operator flag
    RPL_WHOISOPERATOR = 313,
    /// 314 - Whowas user info
    RPL_WHOWASUSER = 314,
    /// 315 - End of WHO list
    RPL_ENDOFWHO = 315,
    /// 317 - Whois idle time
    RPL_WHOISIDLE = 317,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS = 318,
    /// 319 - Whois channel list
    RPL_WHOISCHANNELS = 319,
    /// 321 - LIST start
    RPL_LISTSTART = 321,
    /// 322 - LIST entry
    RPL_LIST = 322,
    /// 323 - End of LIST
    RPL_LISTEND = 323,
    /// 324 - Channel mode string
    RPL_CHANNELMODEIS = 324,
    /// 329 - Channel creation time
    RPL_CREATIONTIME = 329,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 333 - Topic setter and time
    RPL_TOPICWHOTIME = 333,
    /// 341 - Invite confirmation
    RPL_INVITING = 341,
    /// 346 - Invite exception list entry
    RPL_INVITELIST = 346,
    /// 347 - End of invite exception list
    RPL_ENDOFINVITELIST = 347,
    /// 348 - Ban exception list entry
    RPL_EXCEPTLIST = 348,
    /// 349 - End of ban exception list
    RPL_ENDOFEXCEPTLIST = 349,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 367 - Ban list entry
    RPL_BANLIST = 367,
    /// 368 - End of ban list
    RPL_ENDOFBANLIST = 368,
    /// 369 - End of WHOWAS
    RPL_ENDOFWHOWAS = 369,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - You are now an operator
    RPL_YOUREOPER = 381,
    /// 382 - Rehashing config
    RPL_REHASHING = 382,
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 405 - Too many channels
    ERR_TOOMANYCHANNELS = 405,
    /// 406 - Was no such nick
    ERR_WASNOSUCHNICK = 406,
    /// 409 - No origin specified
    ERR_NOORIGIN = 409,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - MOTD missing
    ERR_NOMOTD = 422,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION = 436,
    /// 441 - User not in channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - User already on channel
    ERR_USERONCHANNEL = 443,
    /// 451 - Not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTERED = 462,
    /// 464 - Password mismatch
    ERR_PASSWDMISMATCH = 464,
    /// 465 - Banned from server
    ERR_YOUREBANNEDCREEP = 465,
    /// 471 - Channel is full
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode character
    ERR_UNKNOWNMODE = 472,
    /// 473 - Invite-only channel
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Banned from channel
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Bad channel key
    ERR_BADCHANNELKEY = 475,
    /// 476 - Bad channel mask
    ERR_BADCHANMASK = 476,
    /// 478 - Ban list is full
    ERR_BANLISTFULL = 478,
    /// 481 - No privileges
    ERR_NOPRIVILEGES = 481,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED = 482,
    /// 491 - No O-lines for your host
    ERR_NOOPERHOST = 491,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH = 502,
    /// 671 - Whois secure connection
    RPL_WHOISSECURE = 671,
    /// 728 - Quiet list entry
    RPL_QUIETLIST = 728,
    /// 729 - End of quiet list
    RPL_ENDOFQUIETLIST = 729,
    /// 900 - SASL logged in
    RPL_LOGGEDIN = 900,
    /// 901 - SASL logged out
    RPL_LOGGEDOUT = 901,
    /// 903 - SASL success
    RPL_SASLSUCCESS = 903,
    /// 904 - SASL failed
    ERR_SASLFAIL = 904,
    /// 905 - SASL message too long
    ERR_SASLTOOLONG = 905,
    /// 906 - SASL aborted
    ERR_SASLABORT = 906,
    /// 907 - SASL already authenticated
    ERR_SASLALREADY = 907,
    /// 908 - SASL mechanism list
    RPL_SASLMECHS = 908,
}

impl Response {
    /// Check if this is an error reply (4xx/5xx plus the SASL failures).
    #[inline]
    pub fn is_error(self) -> bool {
        let code = self.code();
        (400..600).contains(&code) || (904..=907).contains(&code)
    }

    /// Look up a reply from a wire numeric string like `"001"` or `"433"`.
    ///
    /// Like the other lookups this is soft: non-numeric input and unknown
    /// codes are both `None`.
    pub fn from_code_str(s: &str) -> Option<Response> {
        s.parse::<u16>().ok().and_then(Response::from_code)
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
