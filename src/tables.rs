/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register value tables for the OV13855 operating modes.
//! Pure data: each entry is written as a single 8-bit register.

use crate::transport::Reg;

/// Common setup written after soft reset, before any mode table.
pub const INIT_SETTING: [Reg; 204] = [
    Reg::new(0x0103, 0x01),
    Reg::new(0x0300, 0x02),
    Reg::new(0x0301, 0x00),
    Reg::new(0x0302, 0x5a),
    Reg::new(0x0303, 0x00),
    Reg::new(0x0304, 0x00),
    Reg::new(0x0305, 0x01),
    Reg::new(0x030b, 0x06),
    Reg::new(0x030c, 0x02),
    Reg::new(0x030d, 0x88),
    Reg::new(0x0312, 0x11),
    Reg::new(0x3022, 0x01),
    Reg::new(0x3013, 0x32),
    Reg::new(0x3016, 0x72),
    Reg::new(0x301b, 0xf0),
    Reg::new(0x301f, 0xd0),
    Reg::new(0x3106, 0x15),
    Reg::new(0x3107, 0x23),
    Reg::new(0x3500, 0x00),
    Reg::new(0x3501, 0x80),
    Reg::new(0x3502, 0x00),
    Reg::new(0x3508, 0x02),
    Reg::new(0x3509, 0x00),
    Reg::new(0x350a, 0x00),
    Reg::new(0x350e, 0x00),
    Reg::new(0x3510, 0x00),
    Reg::new(0x3511, 0x02),
    Reg::new(0x3512, 0x00),
    Reg::new(0x3600, 0x2b),
    Reg::new(0x3601, 0x52),
    Reg::new(0x3602, 0x60),
    Reg::new(0x3612, 0x05),
    Reg::new(0x3613, 0xa4),
    Reg::new(0x3620, 0x80),
    Reg::new(0x3621, 0x10),
    Reg::new(0x3622, 0x30),
    Reg::new(0x3624, 0x1c),
    Reg::new(0x3640, 0x10),
    Reg::new(0x3661, 0x70),
    Reg::new(0x3661, 0x80),
    Reg::new(0x3662, 0x12),
    Reg::new(0x3664, 0x73),
    Reg::new(0x3665, 0xa7),
    Reg::new(0x366e, 0xff),
    Reg::new(0x366f, 0xf4),
    Reg::new(0x3674, 0x00),
    Reg::new(0x3679, 0x0c),
    Reg::new(0x367f, 0x01),
    Reg::new(0x3680, 0x0c),
    Reg::new(0x3681, 0x50),
    Reg::new(0x3682, 0x50),
    Reg::new(0x3683, 0xa9),
    Reg::new(0x3684, 0xa9),
    Reg::new(0x3709, 0x5f),
    Reg::new(0x3714, 0x24),
    Reg::new(0x371a, 0x3e),
    Reg::new(0x3737, 0x04),
    Reg::new(0x3738, 0xcc),
    Reg::new(0x3739, 0x12),
    Reg::new(0x373d, 0x26),
    Reg::new(0x3764, 0x20),
    Reg::new(0x3765, 0x20),
    Reg::new(0x37a1, 0x36),
    Reg::new(0x37a8, 0x3b),
    Reg::new(0x37ab, 0x31),
    Reg::new(0x37c2, 0x04),
    Reg::new(0x37c3, 0xf1),
    Reg::new(0x37c5, 0x00),
    Reg::new(0x37d8, 0x03),
    Reg::new(0x37d9, 0x0c),
    Reg::new(0x37da, 0xc2),
    Reg::new(0x37dc, 0x02),
    Reg::new(0x37e0, 0x00),
    Reg::new(0x37e1, 0x0a),
    Reg::new(0x37e2, 0x14),
    Reg::new(0x37e3, 0x04),
    Reg::new(0x37e4, 0x2a),
    Reg::new(0x37e5, 0x03),
    Reg::new(0x37e6, 0x04),
    Reg::new(0x3800, 0x00),
    Reg::new(0x3801, 0x00),
    Reg::new(0x3802, 0x00),
    Reg::new(0x3803, 0x08),
    Reg::new(0x3804, 0x10),
    Reg::new(0x3805, 0x9f),
    Reg::new(0x3806, 0x0c),
    Reg::new(0x3807, 0x57),
    Reg::new(0x3808, 0x10),
    Reg::new(0x3809, 0x80),
    Reg::new(0x380a, 0x0c),
    Reg::new(0x380b, 0x40),
    Reg::new(0x380c, 0x04),
    Reg::new(0x380d, 0x62),
    Reg::new(0x380e, 0x0c),
    Reg::new(0x380f, 0x8e),
    Reg::new(0x3811, 0x10),
    Reg::new(0x3813, 0x08),
    Reg::new(0x3814, 0x01),
    Reg::new(0x3815, 0x01),
    Reg::new(0x3816, 0x01),
    Reg::new(0x3817, 0x01),
    Reg::new(0x3820, 0xa8),
    Reg::new(0x3821, 0x00),
    Reg::new(0x3822, 0xc2),
    Reg::new(0x3823, 0x18),
    Reg::new(0x3826, 0x11),
    Reg::new(0x3827, 0x1c),
    Reg::new(0x3829, 0x03),
    Reg::new(0x3832, 0x00),
    Reg::new(0x3c80, 0x00),
    Reg::new(0x3c87, 0x01),
    Reg::new(0x3c8c, 0x19),
    Reg::new(0x3c8d, 0x1c),
    Reg::new(0x3c90, 0x00),
    Reg::new(0x3c91, 0x00),
    Reg::new(0x3c92, 0x00),
    Reg::new(0x3c93, 0x00),
    Reg::new(0x3c94, 0x40),
    Reg::new(0x3c95, 0x54),
    Reg::new(0x3c96, 0x34),
    Reg::new(0x3c97, 0x04),
    Reg::new(0x3c98, 0x00),
    Reg::new(0x3d8c, 0x73),
    Reg::new(0x3d8d, 0xc0),
    Reg::new(0x3f00, 0x0b),
    Reg::new(0x3f03, 0x00),
    Reg::new(0x4001, 0xe0),
    Reg::new(0x4008, 0x00),
    Reg::new(0x4009, 0x0f),
    Reg::new(0x4011, 0xf0),
    Reg::new(0x4050, 0x04),
    Reg::new(0x4051, 0x0b),
    Reg::new(0x4052, 0x00),
    Reg::new(0x4053, 0x80),
    Reg::new(0x4054, 0x00),
    Reg::new(0x4055, 0x80),
    Reg::new(0x4056, 0x00),
    Reg::new(0x4057, 0x80),
    Reg::new(0x4058, 0x00),
    Reg::new(0x4059, 0x80),
    Reg::new(0x405e, 0x00),
    Reg::new(0x4500, 0x07),
    Reg::new(0x4503, 0x00),
    Reg::new(0x450a, 0x04),
    Reg::new(0x4809, 0x04),
    Reg::new(0x480c, 0x12),
    Reg::new(0x481f, 0x30),
    Reg::new(0x4833, 0x10),
    Reg::new(0x4837, 0x0e),
    Reg::new(0x4902, 0x01),
    Reg::new(0x4d00, 0x03),
    Reg::new(0x4d01, 0xc9),
    Reg::new(0x4d02, 0xbc),
    Reg::new(0x4d03, 0xd7),
    Reg::new(0x4d04, 0xf0),
    Reg::new(0x4d05, 0xa2),
    Reg::new(0x5000, 0xff),
    Reg::new(0x5001, 0x07),
    Reg::new(0x5040, 0x39),
    Reg::new(0x5041, 0x10),
    Reg::new(0x5042, 0x10),
    Reg::new(0x5043, 0x84),
    Reg::new(0x5044, 0x62),
    Reg::new(0x5180, 0x00),
    Reg::new(0x5181, 0x10),
    Reg::new(0x5182, 0x02),
    Reg::new(0x5183, 0x0f),
    Reg::new(0x5200, 0x1b),
    Reg::new(0x520b, 0x07),
    Reg::new(0x520c, 0x0f),
    Reg::new(0x5300, 0x04),
    Reg::new(0x5301, 0x0c),
    Reg::new(0x5302, 0x0c),
    Reg::new(0x5303, 0x0f),
    Reg::new(0x5304, 0x00),
    Reg::new(0x5305, 0x70),
    Reg::new(0x5306, 0x00),
    Reg::new(0x5307, 0x80),
    Reg::new(0x5308, 0x00),
    Reg::new(0x5309, 0xa5),
    Reg::new(0x530a, 0x00),
    Reg::new(0x530b, 0xd3),
    Reg::new(0x530c, 0x00),
    Reg::new(0x530d, 0xf0),
    Reg::new(0x530e, 0x01),
    Reg::new(0x530f, 0x10),
    Reg::new(0x5310, 0x01),
    Reg::new(0x5311, 0x20),
    Reg::new(0x5312, 0x01),
    Reg::new(0x5313, 0x20),
    Reg::new(0x5314, 0x01),
    Reg::new(0x5315, 0x20),
    Reg::new(0x5316, 0x08),
    Reg::new(0x5317, 0x08),
    Reg::new(0x5318, 0x10),
    Reg::new(0x5319, 0x88),
    Reg::new(0x531a, 0x88),
    Reg::new(0x531b, 0xa9),
    Reg::new(0x531c, 0xaa),
    Reg::new(0x531d, 0x0a),
    Reg::new(0x5405, 0x02),
    Reg::new(0x5406, 0x67),
    Reg::new(0x5407, 0x01),
    Reg::new(0x5408, 0x4a),
];

/// Full resolution, 30 fps.
pub const MODE_4224X3136: [Reg; 98] = [
    Reg::new(0x0300, 0x02),
    Reg::new(0x0301, 0x00),
    Reg::new(0x0302, 0x5a),
    Reg::new(0x0303, 0x00),
    Reg::new(0x0304, 0x00),
    Reg::new(0x0305, 0x01),
    Reg::new(0x3022, 0x01),
    Reg::new(0x3013, 0x32),
    Reg::new(0x3016, 0x72),
    Reg::new(0x301b, 0xf0),
    Reg::new(0x301f, 0xd0),
    Reg::new(0x3106, 0x15),
    Reg::new(0x3107, 0x23),
    Reg::new(0x3500, 0x00),
    Reg::new(0x3501, 0xc8),
    Reg::new(0x3502, 0x60),
    Reg::new(0x3622, 0x30),
    Reg::new(0x3624, 0x1c),
    Reg::new(0x3662, 0x12),
    Reg::new(0x3709, 0x5f),
    Reg::new(0x3714, 0x24),
    Reg::new(0x3737, 0x04),
    Reg::new(0x3739, 0x12),
    Reg::new(0x37a1, 0x36),
    Reg::new(0x37a8, 0x3b),
    Reg::new(0x37ab, 0x31),
    Reg::new(0x37c2, 0x04),
    Reg::new(0x37d9, 0x0c),
    Reg::new(0x37e1, 0x0a),
    Reg::new(0x37e2, 0x14),
    Reg::new(0x37e3, 0x04),
    Reg::new(0x37e4, 0x2a),
    Reg::new(0x37e5, 0x03),
    Reg::new(0x37e6, 0x04),
    Reg::new(0x3800, 0x00),
    Reg::new(0x3801, 0x00),
    Reg::new(0x3802, 0x00),
    Reg::new(0x3803, 0x08),
    Reg::new(0x3804, 0x10),
    Reg::new(0x3805, 0x9f),
    Reg::new(0x3806, 0x0c),
    Reg::new(0x3807, 0x57),
    Reg::new(0x3808, 0x10),
    Reg::new(0x3809, 0x80),
    Reg::new(0x380a, 0x0c),
    Reg::new(0x380b, 0x40),
    Reg::new(0x380c, 0x04),
    Reg::new(0x380d, 0x62),
    Reg::new(0x380e, 0x0c),
    Reg::new(0x380f, 0x8e),
    Reg::new(0x3811, 0x10),
    Reg::new(0x3812, 0x00),
    Reg::new(0x3813, 0x08),
    Reg::new(0x3814, 0x01),
    Reg::new(0x3815, 0x01),
    Reg::new(0x3816, 0x01),
    Reg::new(0x3817, 0x01),
    Reg::new(0x3820, 0xa8),
    Reg::new(0x3821, 0x00),
    Reg::new(0x3826, 0x11),
    Reg::new(0x3827, 0x1c),
    Reg::new(0x3829, 0x03),
    Reg::new(0x3f03, 0x00),
    Reg::new(0x4009, 0x0f),
    Reg::new(0x4011, 0xf0),
    Reg::new(0x4050, 0x04),
    Reg::new(0x4051, 0x0b),
    Reg::new(0x4500, 0x07),
    Reg::new(0x4837, 0x0e),
    Reg::new(0x4902, 0x01),
    Reg::new(0x4d00, 0x03),
    Reg::new(0x4d01, 0xc9),
    Reg::new(0x4d02, 0xbc),
    Reg::new(0x4d03, 0xd7),
    Reg::new(0x4d04, 0xf0),
    Reg::new(0x4d05, 0xa2),
    Reg::new(0x5000, 0xff),
    Reg::new(0x5041, 0x10),
    Reg::new(0x5042, 0x10),
    Reg::new(0x5043, 0x84),
    Reg::new(0x5044, 0x62),
    Reg::new(0x5300, 0x04),
    Reg::new(0x5301, 0x0c),
    Reg::new(0x5302, 0x0c),
    Reg::new(0x5303, 0x0f),
    Reg::new(0x5305, 0x70),
    Reg::new(0x5307, 0x80),
    Reg::new(0x5309, 0xa5),
    Reg::new(0x530b, 0xd3),
    Reg::new(0x5319, 0x88),
    Reg::new(0x531a, 0x88),
    Reg::new(0x531b, 0xa9),
    Reg::new(0x531c, 0xaa),
    Reg::new(0x531d, 0x0a),
    Reg::new(0x5405, 0x02),
    Reg::new(0x5406, 0x67),
    Reg::new(0x5407, 0x01),
    Reg::new(0x5408, 0x4a),
];

/// 2x2 binned, 60 fps.
pub const MODE_2112X1568: [Reg; 98] = [
    Reg::new(0x0300, 0x02),
    Reg::new(0x0301, 0x00),
    Reg::new(0x0302, 0x5a),
    Reg::new(0x0303, 0x01),
    Reg::new(0x0304, 0x00),
    Reg::new(0x0305, 0x01),
    Reg::new(0x3022, 0x01),
    Reg::new(0x3013, 0x32),
    Reg::new(0x3016, 0x72),
    Reg::new(0x301b, 0xf0),
    Reg::new(0x301f, 0xd0),
    Reg::new(0x3106, 0x15),
    Reg::new(0x3107, 0x23),
    Reg::new(0x3500, 0x00),
    Reg::new(0x3501, 0x64),
    Reg::new(0x3502, 0x00),
    Reg::new(0x3622, 0x30),
    Reg::new(0x3624, 0x1c),
    Reg::new(0x3662, 0x10),
    Reg::new(0x3709, 0x5f),
    Reg::new(0x3714, 0x28),
    Reg::new(0x3737, 0x08),
    Reg::new(0x3739, 0x20),
    Reg::new(0x37a1, 0x36),
    Reg::new(0x37a8, 0x3b),
    Reg::new(0x37ab, 0x31),
    Reg::new(0x37c2, 0x14),
    Reg::new(0x37d9, 0x0c),
    Reg::new(0x37e1, 0x0a),
    Reg::new(0x37e2, 0x14),
    Reg::new(0x37e3, 0x08),
    Reg::new(0x37e4, 0x38),
    Reg::new(0x37e5, 0x03),
    Reg::new(0x37e6, 0x08),
    Reg::new(0x3800, 0x00),
    Reg::new(0x3801, 0x00),
    Reg::new(0x3802, 0x00),
    Reg::new(0x3803, 0x08),
    Reg::new(0x3804, 0x10),
    Reg::new(0x3805, 0x9f),
    Reg::new(0x3806, 0x0c),
    Reg::new(0x3807, 0x4f),
    Reg::new(0x3808, 0x08),
    Reg::new(0x3809, 0x40),
    Reg::new(0x380a, 0x06),
    Reg::new(0x380b, 0x20),
    Reg::new(0x380c, 0x04),
    Reg::new(0x380d, 0x62),
    Reg::new(0x380e, 0x06),
    Reg::new(0x380f, 0x48),
    Reg::new(0x3811, 0x08),
    Reg::new(0x3812, 0x00),
    Reg::new(0x3813, 0x02),
    Reg::new(0x3814, 0x03),
    Reg::new(0x3815, 0x01),
    Reg::new(0x3816, 0x03),
    Reg::new(0x3817, 0x01),
    Reg::new(0x3820, 0xab),
    Reg::new(0x3821, 0x00),
    Reg::new(0x3826, 0x04),
    Reg::new(0x3827, 0x90),
    Reg::new(0x3829, 0x07),
    Reg::new(0x3f03, 0x00),
    Reg::new(0x4009, 0x0d),
    Reg::new(0x4011, 0xf0),
    Reg::new(0x4050, 0x04),
    Reg::new(0x4051, 0x0b),
    Reg::new(0x4500, 0x07),
    Reg::new(0x4837, 0x1c),
    Reg::new(0x4902, 0x01),
    Reg::new(0x4d00, 0x03),
    Reg::new(0x4d01, 0xc9),
    Reg::new(0x4d02, 0xbc),
    Reg::new(0x4d03, 0xd7),
    Reg::new(0x4d04, 0xf0),
    Reg::new(0x4d05, 0xa2),
    Reg::new(0x5000, 0xff),
    Reg::new(0x5041, 0x10),
    Reg::new(0x5042, 0x10),
    Reg::new(0x5043, 0x84),
    Reg::new(0x5044, 0x62),
    Reg::new(0x5300, 0x04),
    Reg::new(0x5301, 0x0c),
    Reg::new(0x5302, 0x0c),
    Reg::new(0x5303, 0x0f),
    Reg::new(0x5305, 0x70),
    Reg::new(0x5307, 0x80),
    Reg::new(0x5309, 0xa5),
    Reg::new(0x530b, 0xd3),
    Reg::new(0x5319, 0x88),
    Reg::new(0x531a, 0x88),
    Reg::new(0x531b, 0xa9),
    Reg::new(0x531c, 0xaa),
    Reg::new(0x531d, 0x0a),
    Reg::new(0x5405, 0x02),
    Reg::new(0x5406, 0x67),
    Reg::new(0x5407, 0x01),
    Reg::new(0x5408, 0x4a),
];

/// 4x4 binned, 30 fps.
pub const MODE_1056X784: [Reg; 187] = [
    Reg::new(0x3013, 0x32),
    Reg::new(0x301b, 0xf0),
    Reg::new(0x301f, 0xd0),
    Reg::new(0x3106, 0x15),
    Reg::new(0x3107, 0x23),
    Reg::new(0x350a, 0x00),
    Reg::new(0x350e, 0x00),
    Reg::new(0x3510, 0x00),
    Reg::new(0x3511, 0x02),
    Reg::new(0x3512, 0x00),
    Reg::new(0x3600, 0x2b),
    Reg::new(0x3601, 0x52),
    Reg::new(0x3602, 0x60),
    Reg::new(0x3612, 0x05),
    Reg::new(0x3613, 0xa4),
    Reg::new(0x3620, 0x80),
    Reg::new(0x3621, 0x10),
    Reg::new(0x3622, 0x30),
    Reg::new(0x3624, 0x1c),
    Reg::new(0x3640, 0x10),
    Reg::new(0x3641, 0x70),
    Reg::new(0x3661, 0x80),
    Reg::new(0x3662, 0x08),
    Reg::new(0x3664, 0x73),
    Reg::new(0x3665, 0xa7),
    Reg::new(0x366e, 0xff),
    Reg::new(0x366f, 0xf4),
    Reg::new(0x3674, 0x00),
    Reg::new(0x3679, 0x0c),
    Reg::new(0x367f, 0x01),
    Reg::new(0x3680, 0x0c),
    Reg::new(0x3681, 0x50),
    Reg::new(0x3682, 0x50),
    Reg::new(0x3683, 0xa9),
    Reg::new(0x3684, 0xa9),
    Reg::new(0x3709, 0x5f),
    Reg::new(0x3714, 0x30),
    Reg::new(0x371a, 0x3e),
    Reg::new(0x3737, 0x08),
    Reg::new(0x3738, 0xcc),
    Reg::new(0x3739, 0x20),
    Reg::new(0x373d, 0x26),
    Reg::new(0x3764, 0x20),
    Reg::new(0x3765, 0x20),
    Reg::new(0x37a1, 0x36),
    Reg::new(0x37a8, 0x3b),
    Reg::new(0x37ab, 0x31),
    Reg::new(0x37c2, 0x2c),
    Reg::new(0x37c3, 0xf1),
    Reg::new(0x37c5, 0x00),
    Reg::new(0x37d8, 0x03),
    Reg::new(0x37d9, 0x06),
    Reg::new(0x37da, 0xc2),
    Reg::new(0x37dc, 0x02),
    Reg::new(0x37e0, 0x00),
    Reg::new(0x37e1, 0x0a),
    Reg::new(0x37e2, 0x14),
    Reg::new(0x37e3, 0x08),
    Reg::new(0x37e4, 0x36),
    Reg::new(0x37e5, 0x03),
    Reg::new(0x37e6, 0x08),
    Reg::new(0x3800, 0x00),
    Reg::new(0x3801, 0x00),
    Reg::new(0x3802, 0x00),
    Reg::new(0x3803, 0x00),
    Reg::new(0x3804, 0x10),
    Reg::new(0x3805, 0x9f),
    Reg::new(0x3806, 0x0c),
    Reg::new(0x3807, 0x5f),
    Reg::new(0x3808, 0x04),
    Reg::new(0x3809, 0x20),
    Reg::new(0x380a, 0x03),
    Reg::new(0x380b, 0x10),
    Reg::new(0x380c, 0x04),
    Reg::new(0x380d, 0x62),
    Reg::new(0x380e, 0x0c),
    Reg::new(0x380f, 0x8e),
    Reg::new(0x3811, 0x04),
    Reg::new(0x3813, 0x05),
    Reg::new(0x3814, 0x07),
    Reg::new(0x3815, 0x01),
    Reg::new(0x3816, 0x07),
    Reg::new(0x3817, 0x01),
    Reg::new(0x3820, 0xac),
    Reg::new(0x3821, 0x00),
    Reg::new(0x3822, 0xc2),
    Reg::new(0x3823, 0x18),
    Reg::new(0x3826, 0x04),
    Reg::new(0x3827, 0x48),
    Reg::new(0x3829, 0x03),
    Reg::new(0x3832, 0x00),
    Reg::new(0x3c80, 0x00),
    Reg::new(0x3c87, 0x01),
    Reg::new(0x3c8c, 0x19),
    Reg::new(0x3c8d, 0x1c),
    Reg::new(0x3c90, 0x00),
    Reg::new(0x3c91, 0x00),
    Reg::new(0x3c92, 0x00),
    Reg::new(0x3c93, 0x00),
    Reg::new(0x3c94, 0x40),
    Reg::new(0x3c95, 0x54),
    Reg::new(0x3c96, 0x34),
    Reg::new(0x3c97, 0x04),
    Reg::new(0x3c98, 0x00),
    Reg::new(0x3d8c, 0x73),
    Reg::new(0x3d8d, 0xc0),
    Reg::new(0x3f00, 0x0b),
    Reg::new(0x3f03, 0x00),
    Reg::new(0x4001, 0xe0),
    Reg::new(0x4008, 0x00),
    Reg::new(0x4009, 0x05),
    Reg::new(0x4011, 0xf0),
    Reg::new(0x4017, 0x08),
    Reg::new(0x4050, 0x02),
    Reg::new(0x4051, 0x05),
    Reg::new(0x4052, 0x00),
    Reg::new(0x4053, 0x80),
    Reg::new(0x4054, 0x00),
    Reg::new(0x4055, 0x80),
    Reg::new(0x4056, 0x00),
    Reg::new(0x4057, 0x80),
    Reg::new(0x4058, 0x00),
    Reg::new(0x4059, 0x80),
    Reg::new(0x405e, 0x20),
    Reg::new(0x4500, 0x07),
    Reg::new(0x4503, 0x00),
    Reg::new(0x450a, 0x04),
    Reg::new(0x4809, 0x04),
    Reg::new(0x480c, 0x12),
    Reg::new(0x481f, 0x30),
    Reg::new(0x4833, 0x10),
    Reg::new(0x4837, 0x1e),
    Reg::new(0x4902, 0x02),
    Reg::new(0x4d00, 0x03),
    Reg::new(0x4d01, 0xc9),
    Reg::new(0x4d02, 0xbc),
    Reg::new(0x4d03, 0xd7),
    Reg::new(0x4d04, 0xf0),
    Reg::new(0x4d05, 0xa2),
    Reg::new(0x5000, 0xfd),
    Reg::new(0x5001, 0x01),
    Reg::new(0x5040, 0x39),
    Reg::new(0x5041, 0x10),
    Reg::new(0x5042, 0x10),
    Reg::new(0x5043, 0x84),
    Reg::new(0x5044, 0x62),
    Reg::new(0x5180, 0x00),
    Reg::new(0x5181, 0x10),
    Reg::new(0x5182, 0x02),
    Reg::new(0x5183, 0x0f),
    Reg::new(0x5200, 0x1b),
    Reg::new(0x520b, 0x07),
    Reg::new(0x520c, 0x0f),
    Reg::new(0x5300, 0x04),
    Reg::new(0x5301, 0x0c),
    Reg::new(0x5302, 0x0c),
    Reg::new(0x5303, 0x0f),
    Reg::new(0x5304, 0x00),
    Reg::new(0x5305, 0x70),
    Reg::new(0x5306, 0x00),
    Reg::new(0x5307, 0x80),
    Reg::new(0x5308, 0x00),
    Reg::new(0x5309, 0xa5),
    Reg::new(0x530a, 0x00),
    Reg::new(0x530b, 0xd3),
    Reg::new(0x530c, 0x00),
    Reg::new(0x530d, 0xf0),
    Reg::new(0x530e, 0x01),
    Reg::new(0x530f, 0x10),
    Reg::new(0x5310, 0x01),
    Reg::new(0x5311, 0x20),
    Reg::new(0x5312, 0x01),
    Reg::new(0x5313, 0x20),
    Reg::new(0x5314, 0x01),
    Reg::new(0x5315, 0x20),
    Reg::new(0x5316, 0x08),
    Reg::new(0x5317, 0x08),
    Reg::new(0x5318, 0x10),
    Reg::new(0x5319, 0x88),
    Reg::new(0x531a, 0x88),
    Reg::new(0x531b, 0xa9),
    Reg::new(0x531c, 0xaa),
    Reg::new(0x531d, 0x0a),
    Reg::new(0x5405, 0x02),
    Reg::new(0x5406, 0x67),
    Reg::new(0x5407, 0x01),
    Reg::new(0x5408, 0x4a),
];

/// PLL settings per link frequency. The defaults programmed by
/// `INIT_SETTING` already match both rates, so these are empty.
pub const PLL_1080MBPS: [Reg; 0] = [];
pub const PLL_540MBPS: [Reg; 0] = [];
